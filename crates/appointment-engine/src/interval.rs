//! Absolute instants and the intervals built from them.
//!
//! An [`Instant`] remembers the zone it was entered in for display, but every
//! comparison (equality, ordering, hashing) looks only at the UTC value. Two
//! instants read off different wall clocks are equal when they name the same
//! moment.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::ops::Add;

use chrono::{DateTime, Duration, NaiveDate, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

/// An absolute point in time plus the zone it originated in.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Instant {
    utc: DateTime<Utc>,
    zone: Tz,
}

impl Instant {
    pub fn new(utc: DateTime<Utc>, zone: Tz) -> Self {
        Self { utc, zone }
    }

    /// An instant whose display zone is UTC.
    pub fn from_utc(utc: DateTime<Utc>) -> Self {
        Self { utc, zone: Tz::UTC }
    }

    pub fn utc(&self) -> DateTime<Utc> {
        self.utc
    }

    /// The zone this instant was entered in.
    pub fn zone(&self) -> Tz {
        self.zone
    }

    /// This instant as a wall-clock reading in `zone`.
    pub fn in_zone(&self, zone: &Tz) -> DateTime<Tz> {
        self.utc.with_timezone(zone)
    }

    /// This instant as a wall-clock reading in its originating zone.
    pub fn local(&self) -> DateTime<Tz> {
        self.in_zone(&self.zone)
    }

    /// The calendar date this instant falls on in `zone`.
    pub fn date_in(&self, zone: &Tz) -> NaiveDate {
        self.in_zone(zone).date_naive()
    }

    /// Same instant, displayed in a different zone.
    pub fn with_zone(self, zone: Tz) -> Self {
        Self { utc: self.utc, zone }
    }
}

impl From<DateTime<Tz>> for Instant {
    fn from(dt: DateTime<Tz>) -> Self {
        Self {
            utc: dt.with_timezone(&Utc),
            zone: dt.timezone(),
        }
    }
}

impl From<DateTime<Utc>> for Instant {
    fn from(utc: DateTime<Utc>) -> Self {
        Self::from_utc(utc)
    }
}

impl PartialEq for Instant {
    fn eq(&self, other: &Self) -> bool {
        self.utc == other.utc
    }
}

impl Eq for Instant {}

impl PartialOrd for Instant {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Instant {
    fn cmp(&self, other: &Self) -> Ordering {
        self.utc.cmp(&other.utc)
    }
}

impl Hash for Instant {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.utc.hash(state);
    }
}

impl Add<Duration> for Instant {
    type Output = Instant;

    fn add(self, rhs: Duration) -> Instant {
        Instant {
            utc: self.utc + rhs,
            zone: self.zone,
        }
    }
}

/// The occupied time of one appointment.
///
/// Construction does not check `start < end`; the validator rejects such
/// intervals before running any other check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeInterval {
    pub start: Instant,
    pub end: Instant,
}

impl TimeInterval {
    pub fn new(start: impl Into<Instant>, end: impl Into<Instant>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    /// `true` when the end is strictly after the start.
    pub fn is_valid(&self) -> bool {
        self.start < self.end
    }

    pub fn duration(&self) -> Duration {
        self.end.utc - self.start.utc
    }

    /// First and last calendar dates touched by this interval in `zone`.
    pub fn date_span(&self, zone: &Tz) -> (NaiveDate, NaiveDate) {
        let first = self.start.date_in(zone);
        let last = self.end.date_in(zone);
        if last < first {
            (last, first)
        } else {
            (first, last)
        }
    }
}
