//! The accept/reject decision for creating or editing an appointment.
//!
//! Stages run in a fixed order and stop at the first failure, so the user
//! sees one problem at a time:
//!
//! 1. the interval must end strictly after it starts,
//! 2. it must sit inside business hours,
//! 3. it must not overlap another of the customer's appointments.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::appointment::{Appointment, AppointmentId, CustomerId};
use crate::hours::BusinessHoursPolicy;
use crate::interval::TimeInterval;
use crate::overlap::{find_conflict, Conflict};

/// Result of validating one proposed interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationOutcome {
    Accepted,
    /// End is not strictly after start.
    RejectedInvalidInterval,
    /// Start is before opening or end is after closing.
    RejectedOutsideBusinessHours,
    /// Overlaps another appointment for the same customer.
    RejectedOverlap,
}

impl ValidationOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, ValidationOutcome::Accepted)
    }
}

/// Outcome of a validation plus, for an overlap, what it collided with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    pub outcome: ValidationOutcome,
    /// Set only when `outcome` is [`ValidationOutcome::RejectedOverlap`].
    pub conflict: Option<Conflict>,
    /// The booked appointment behind `conflict`, when validated against a book.
    pub conflicting_appointment: Option<AppointmentId>,
}

impl Verdict {
    fn without_conflict(outcome: ValidationOutcome) -> Self {
        Self {
            outcome,
            conflict: None,
            conflicting_appointment: None,
        }
    }
}

/// Validate `proposed` against `policy` and the customer's existing intervals.
///
/// `exclude` is the previous interval of the appointment being edited, if
/// any; it is left out of the overlap comparison.
pub fn validate(
    proposed: &TimeInterval,
    policy: &BusinessHoursPolicy,
    existing_for_customer: &[TimeInterval],
    exclude: Option<&TimeInterval>,
) -> ValidationOutcome {
    check(proposed, policy, existing_for_customer, exclude).outcome
}

/// Same stages as [`validate`], also reporting the conflict on an overlap.
pub fn check(
    proposed: &TimeInterval,
    policy: &BusinessHoursPolicy,
    existing_for_customer: &[TimeInterval],
    exclude: Option<&TimeInterval>,
) -> Verdict {
    if !proposed.is_valid() {
        debug!(?proposed, "rejected: end is not after start");
        return Verdict::without_conflict(ValidationOutcome::RejectedInvalidInterval);
    }

    if !policy.is_within_hours(proposed) {
        debug!(?proposed, "rejected: outside business hours");
        return Verdict::without_conflict(ValidationOutcome::RejectedOutsideBusinessHours);
    }

    if let Some(conflict) = find_conflict(proposed, existing_for_customer, exclude, policy.zone) {
        debug!(
            ?proposed,
            with = ?conflict.with,
            kind = ?conflict.kind,
            "rejected: overlaps an existing appointment"
        );
        return Verdict {
            outcome: ValidationOutcome::RejectedOverlap,
            conflict: Some(conflict),
            conflicting_appointment: None,
        };
    }

    Verdict::without_conflict(ValidationOutcome::Accepted)
}

/// Validate `proposed` for `customer_id` against a full appointment book.
///
/// See [`check_appointment`].
pub fn validate_appointment(
    proposed: &TimeInterval,
    customer_id: CustomerId,
    policy: &BusinessHoursPolicy,
    book: &[Appointment],
    editing: Option<AppointmentId>,
) -> ValidationOutcome {
    check_appointment(proposed, customer_id, policy, book, editing).outcome
}

/// Check `proposed` for `customer_id` against a full appointment book.
///
/// Compares against every appointment `customer_id` holds in `book` except
/// the one named by `editing`. The edited appointment is left out by
/// identity, so another booking that happens to share its interval is still
/// compared, and an appointment being moved in from another customer
/// excludes nothing.
pub fn check_appointment(
    proposed: &TimeInterval,
    customer_id: CustomerId,
    policy: &BusinessHoursPolicy,
    book: &[Appointment],
    editing: Option<AppointmentId>,
) -> Verdict {
    let others: Vec<&Appointment> = book
        .iter()
        .filter(|appointment| appointment.customer_id == customer_id)
        .filter(|appointment| Some(appointment.id) != editing)
        .collect();
    let existing: Vec<TimeInterval> = others.iter().map(|appointment| appointment.interval).collect();

    let mut verdict = check(proposed, policy, &existing, None);
    // The scan stops at the first hit, so the first equal interval is the one it hit.
    verdict.conflicting_appointment = verdict.conflict.as_ref().and_then(|conflict| {
        others
            .iter()
            .find(|appointment| appointment.interval == conflict.with)
            .map(|appointment| appointment.id)
    });
    verdict
}
