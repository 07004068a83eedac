//! Find the appointment about to begin.
//!
//! Used once at session start to warn about anything starting within the
//! lookahead window (15 minutes by default). Returns the soonest match, not
//! the first one in input order, so callers need not pre-sort.

use chrono::{DateTime, Duration, Utc};

use crate::appointment::Appointment;
use crate::interval::Instant;

/// Default lookahead window in minutes.
pub const DEFAULT_LOOKAHEAD_MINUTES: i64 = 15;

/// Find the soonest appointment whose start lies in `(now, now + lookahead]`.
///
/// An appointment starting exactly at `now` has already begun and is not
/// reported. Ties on start go to the earliest in input order. A zero or
/// negative `lookahead` never matches anything.
pub fn find_upcoming<'a>(
    now: &Instant,
    appointments: &'a [Appointment],
    lookahead: Duration,
) -> Option<&'a Appointment> {
    if lookahead <= Duration::zero() {
        return None;
    }

    let now = now.utc();
    // Only a positive lookahead gets here, so overflow can only be past the end of time.
    let horizon = now
        .checked_add_signed(lookahead)
        .unwrap_or(DateTime::<Utc>::MAX_UTC);

    appointments
        .iter()
        .filter(|appointment| {
            let start = appointment.interval.start.utc();
            start > now && start <= horizon
        })
        .min_by_key(|appointment| appointment.interval.start)
}
