//! Detect overlap between a proposed appointment and a customer's bookings.
//!
//! Comparisons are done on the UTC instant. Two intervals conflict when the
//! proposed start or end falls strictly inside the other, when they share a
//! start or an end, or when the proposed interval strictly contains the
//! other. Intervals that merely abut (one ends exactly when the other starts)
//! do NOT conflict.
//!
//! When editing, the appointment's own previous interval can be passed as
//! `exclude` so it is not compared against itself.

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::interval::TimeInterval;

/// Which overlap condition matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConflictKind {
    /// Proposed start lies strictly inside the other interval.
    StartInside,
    /// Proposed end lies strictly inside the other interval.
    EndInside,
    /// Both intervals start at the same instant.
    SharedStart,
    /// Both intervals end at the same instant.
    SharedEnd,
    /// Proposed interval strictly contains the other.
    Contains,
}

/// A detected conflict against one existing interval.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conflict {
    pub with: TimeInterval,
    pub kind: ConflictKind,
    pub overlap_minutes: i64,
}

/// Classify how `proposed` overlaps `other`, if at all.
pub fn classify(proposed: &TimeInterval, other: &TimeInterval) -> Option<ConflictKind> {
    let (ps, pe) = (proposed.start.utc(), proposed.end.utc());
    let (os, oe) = (other.start.utc(), other.end.utc());

    if os < ps && ps < oe {
        Some(ConflictKind::StartInside)
    } else if os < pe && pe < oe {
        Some(ConflictKind::EndInside)
    } else if ps == os {
        Some(ConflictKind::SharedStart)
    } else if pe == oe {
        Some(ConflictKind::SharedEnd)
    } else if ps < os && pe > oe {
        Some(ConflictKind::Contains)
    } else {
        None
    }
}

/// Cheap day-level prefilter: `true` when the two intervals' calendar-date
/// spans in `zone` cannot intersect.
///
/// Spans are compared rather than single start dates so that an interval
/// crossing midnight is never skipped against one on its second day.
fn day_disjoint(proposed: &TimeInterval, other: &TimeInterval, zone: &Tz) -> bool {
    let (p_first, p_last) = proposed.date_span(zone);
    let (o_first, o_last) = other.date_span(zone);
    p_last < o_first || o_last < p_first
}

/// Find the first interval in `existing` that conflicts with `proposed`.
///
/// `zone` is the reference zone used for the day-level prefilter. An
/// interval equal to `exclude` (same start and same end instant) is skipped.
/// Scanning stops at the first conflict.
///
/// Returns `None` for an invalid `proposed` (end not after start); the
/// validator rejects those before overlap is ever checked.
pub fn find_conflict(
    proposed: &TimeInterval,
    existing: &[TimeInterval],
    exclude: Option<&TimeInterval>,
    zone: Tz,
) -> Option<Conflict> {
    if !proposed.is_valid() {
        debug!(?proposed, "proposed interval is not comparable");
        return None;
    }

    for other in existing {
        if day_disjoint(proposed, other, &zone) {
            trace!(?other, "skipping interval on another day");
            continue;
        }
        if exclude == Some(other) {
            trace!(?other, "skipping excluded interval");
            continue;
        }

        if let Some(kind) = classify(proposed, other) {
            let overlap_start = proposed.start.utc().max(other.start.utc());
            let overlap_end = proposed.end.utc().min(other.end.utc());
            let overlap_minutes = (overlap_end - overlap_start).num_minutes();

            debug!(?kind, overlap_minutes, "conflict found");
            return Some(Conflict {
                with: *other,
                kind,
                overlap_minutes,
            });
        }
    }

    None
}

/// Whether `proposed` conflicts with any interval in `existing` other than
/// `exclude`. See [`find_conflict`].
pub fn has_conflict(
    proposed: &TimeInterval,
    existing: &[TimeInterval],
    exclude: Option<&TimeInterval>,
    zone: Tz,
) -> bool {
    find_conflict(proposed, existing, exclude, zone).is_some()
}
