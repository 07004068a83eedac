//! Business-hours policy.
//!
//! Appointments are offered between an opening and a closing wall-clock time
//! in a fixed reference zone, independent of the zone they were entered in.
//! The default policy is 08:00:00 to 22:00:00 US Eastern.

use chrono::NaiveTime;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};
use crate::interval::TimeInterval;

const fn hms(hour: u32, min: u32, sec: u32) -> NaiveTime {
    match NaiveTime::from_hms_opt(hour, min, sec) {
        Some(t) => t,
        None => panic!("invalid time of day"),
    }
}

/// Default opening time of day in the reference zone.
pub const DEFAULT_OPENING: NaiveTime = hms(8, 0, 0);

/// Default closing time of day in the reference zone.
pub const DEFAULT_CLOSING: NaiveTime = hms(22, 0, 0);

/// Default reference zone.
pub const DEFAULT_ZONE: Tz = chrono_tz::America::New_York;

/// The window inside which appointments may be booked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessHoursPolicy {
    /// Zone the opening and closing times are read in.
    pub zone: Tz,
    pub opening: NaiveTime,
    pub closing: NaiveTime,
}

impl Default for BusinessHoursPolicy {
    fn default() -> Self {
        Self {
            zone: DEFAULT_ZONE,
            opening: DEFAULT_OPENING,
            closing: DEFAULT_CLOSING,
        }
    }
}

impl BusinessHoursPolicy {
    /// Build a policy, checking that opening comes before closing.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidBusinessHours`] if `opening >= closing`.
    pub fn new(zone: Tz, opening: NaiveTime, closing: NaiveTime) -> Result<Self> {
        if opening >= closing {
            return Err(EngineError::InvalidBusinessHours(format!(
                "opening {} is not before closing {}",
                opening, closing
            )));
        }
        Ok(Self {
            zone,
            opening,
            closing,
        })
    }

    /// Whether `interval` respects this policy.
    ///
    /// The start, read in the reference zone, must not be before the opening
    /// time. The end, read in the reference zone, must not be after the
    /// closing time on the end's own calendar date. The two ends are checked
    /// independently.
    pub fn is_within_hours(&self, interval: &TimeInterval) -> bool {
        let start_local = interval.start.in_zone(&self.zone);
        if start_local.time() < self.opening {
            return false;
        }

        let end_local = interval.end.in_zone(&self.zone).naive_local();
        end_local <= end_local.date().and_time(self.closing)
    }
}
