//! Wall-clock normalization across time zones.
//!
//! Turns a (calendar date, wall-clock time, origin zone) triple into an
//! absolute [`Instant`], and reads any instant back as a (date, time) pair in a
//! target zone. The origin zone is always an explicit argument; nothing here
//! consults the host's default zone or the system clock.
//!
//! # DST
//!
//! A wall-clock reading that falls in a spring-forward gap does not exist and
//! is reported as [`EngineError::MalformedTimeInput`]. A reading that occurs
//! twice during a fall-back transition resolves to the earlier instant.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeZone};
use chrono_tz::Tz;

use crate::error::{EngineError, Result};
use crate::interval::Instant;

/// Parse an IANA zone name such as `"America/New_York"`.
///
/// # Errors
///
/// Returns [`EngineError::InvalidTimezone`] if the name is not a known zone.
pub fn parse_zone(name: &str) -> Result<Tz> {
    name.trim()
        .parse::<Tz>()
        .map_err(|_| EngineError::InvalidTimezone(name.to_string()))
}

/// Parse a wall-clock time of day.
///
/// Accepts `HH:mm:ss` and the shorter `HH:mm`.
///
/// # Errors
///
/// Returns [`EngineError::MalformedTimeInput`] for anything else.
pub fn parse_wall_clock(text: &str) -> Result<NaiveTime> {
    let trimmed = text.trim();
    NaiveTime::parse_from_str(trimmed, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M"))
        .map_err(|_| {
            EngineError::MalformedTimeInput(format!("expected HH:mm:ss, got '{}'", text))
        })
}

/// Combine a calendar date and a wall-clock time read in `origin` into an
/// absolute instant.
///
/// # Errors
///
/// Returns [`EngineError::MalformedTimeInput`] if the date is absent, the
/// time cannot be parsed, or the wall-clock reading does not exist in
/// `origin` (DST gap).
///
/// # Examples
///
/// ```
/// use appointment_engine::normalize;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2024, 3, 4);
/// let instant = normalize(date, "09:00:00", chrono_tz::America::New_York).unwrap();
/// // March 4 2024 is EST (UTC-5)
/// assert_eq!(instant.utc().to_rfc3339(), "2024-03-04T14:00:00+00:00");
/// ```
pub fn normalize(date: Option<NaiveDate>, wall_clock: &str, origin: Tz) -> Result<Instant> {
    let date = date.ok_or_else(|| EngineError::MalformedTimeInput("missing date".to_string()))?;
    let time = parse_wall_clock(wall_clock)?;
    localize(date.and_time(time), origin)
}

/// String-level form of [`normalize`]: parses an ISO date (`YYYY-MM-DD`) and
/// an IANA zone name as well.
///
/// # Errors
///
/// Returns [`EngineError::MalformedTimeInput`] for a blank or unparseable date
/// or time, and [`EngineError::InvalidTimezone`] for an unknown zone.
pub fn normalize_str(date: &str, wall_clock: &str, zone: &str) -> Result<Instant> {
    let date = date.trim();
    let date = if date.is_empty() {
        None
    } else {
        Some(NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|_| {
            EngineError::MalformedTimeInput(format!("expected YYYY-MM-DD, got '{}'", date))
        })?)
    };
    let origin = parse_zone(zone)?;
    normalize(date, wall_clock, origin)
}

/// Read `instant` as a (date, wall-clock time) pair in `target`.
pub fn to_zone(instant: &Instant, target: Tz) -> (NaiveDate, NaiveTime) {
    let local = instant.in_zone(&target);
    (local.date_naive(), local.time())
}

/// Resolve a naive local date-time in `zone` to an instant.
pub(crate) fn localize(naive: NaiveDateTime, zone: Tz) -> Result<Instant> {
    zone.from_local_datetime(&naive)
        .earliest()
        .map(Instant::from)
        .ok_or_else(|| {
            EngineError::MalformedTimeInput(format!("{} does not exist in {}", naive, zone.name()))
        })
}
