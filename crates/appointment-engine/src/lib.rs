//! # appointment-engine
//!
//! Time-conflict and business-hours validation for appointment scheduling.
//!
//! Every appointment must fall inside a fixed service-hours window and must
//! not overlap another appointment already booked for the same customer. The
//! engine checks both, normalizing wall-clock input across time zones first.
//! It performs no I/O: callers hand in already-fetched appointment lists and
//! an explicit "now", and get plain decisions back.
//!
//! ## Modules
//!
//! - [`interval`] — `Instant` and `TimeInterval`, compared by value on the UTC instant
//! - [`appointment`] — appointment records as consumed by validation
//! - [`normalize`] — (date, wall-clock, zone) → `Instant`, and back into any zone
//! - [`hours`] — the business-hours policy and its predicate
//! - [`overlap`] — per-customer overlap detection with self-exclusion
//! - [`upcoming`] — find the soonest appointment inside a lookahead window
//! - [`validate`] — the single accept/reject decision for create and edit
//! - [`calendar`] — month / ISO-week views and per-customer interval lookup
//! - [`error`] — Error types

pub mod appointment;
pub mod calendar;
pub mod error;
pub mod hours;
pub mod interval;
pub mod normalize;
pub mod overlap;
pub mod upcoming;
pub mod validate;

pub use appointment::{Appointment, AppointmentId, CustomerId};
pub use calendar::{in_iso_week, in_month, intervals_for_customer};
pub use error::EngineError;
pub use hours::BusinessHoursPolicy;
pub use interval::{Instant, TimeInterval};
pub use normalize::{normalize, normalize_str, parse_wall_clock, parse_zone, to_zone};
pub use overlap::{find_conflict, has_conflict, Conflict, ConflictKind};
pub use upcoming::{find_upcoming, DEFAULT_LOOKAHEAD_MINUTES};
pub use validate::{check, check_appointment, validate, validate_appointment, ValidationOutcome, Verdict};
