//! Appointment records as the validation engine sees them.
//!
//! Only the identity, the customer and the occupied interval matter here.
//! Everything else (title, location, contact, ...) rides along in
//! [`Appointment::details`] untouched.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::interval::TimeInterval;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AppointmentId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerId(pub u64);

impl fmt::Display for AppointmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A booked (or proposed) appointment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: AppointmentId,
    pub customer_id: CustomerId,
    pub interval: TimeInterval,
    /// Opaque descriptive payload, passed through as-is.
    #[serde(default)]
    pub details: Map<String, Value>,
}

impl Appointment {
    pub fn new(id: AppointmentId, customer_id: CustomerId, interval: TimeInterval) -> Self {
        Self {
            id,
            customer_id,
            interval,
            details: Map::new(),
        }
    }

    /// Attach one descriptive field.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }
}
