//! JSON appointment book: the CLI's stand-in for the data-access layer.
//!
//! A book is a JSON array of entries:
//!
//! ```json
//! [{"id": 1, "customer_id": 7,
//!   "start": "2024-03-04T09:00:00-05:00", "end": "2024-03-04T10:00:00-05:00",
//!   "zone": "America/New_York", "title": "Checkup"}]
//! ```
//!
//! `zone` is optional (defaults to UTC) and only affects display. Any other
//! key is carried through as opaque appointment details.

use std::path::Path;

use anyhow::{Context, Result};
use appointment_engine::{parse_zone, Appointment, AppointmentId, CustomerId, Instant, TimeInterval};
use chrono::{DateTime, FixedOffset, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One appointment as stored in a book file.
#[derive(Debug, Serialize, Deserialize)]
pub struct BookEntry {
    pub id: u64,
    pub customer_id: u64,
    pub start: DateTime<FixedOffset>,
    pub end: DateTime<FixedOffset>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zone: Option<String>,
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

impl BookEntry {
    fn into_appointment(self) -> Result<Appointment> {
        let zone = match self.zone.as_deref() {
            Some(name) => parse_zone(name)
                .with_context(|| format!("appointment {} has an invalid zone", self.id))?,
            None => Tz::UTC,
        };
        let interval = TimeInterval::new(
            Instant::new(self.start.with_timezone(&Utc), zone),
            Instant::new(self.end.with_timezone(&Utc), zone),
        );
        let mut appointment = Appointment::new(
            AppointmentId(self.id),
            CustomerId(self.customer_id),
            interval,
        );
        appointment.details = self.details;
        Ok(appointment)
    }
}

impl From<&Appointment> for BookEntry {
    fn from(appointment: &Appointment) -> Self {
        let zone = appointment.interval.start.zone();
        Self {
            id: appointment.id.0,
            customer_id: appointment.customer_id.0,
            start: appointment.interval.start.local().fixed_offset(),
            end: appointment.interval.end.in_zone(&zone).fixed_offset(),
            zone: Some(zone.name().to_string()),
            details: appointment.details.clone(),
        }
    }
}

/// Parse a book from JSON text.
pub fn parse_book(json: &str) -> Result<Vec<Appointment>> {
    let entries: Vec<BookEntry> =
        serde_json::from_str(json).context("Appointment book must be a JSON array of appointments")?;
    entries.into_iter().map(BookEntry::into_appointment).collect()
}

/// Load a book file. A missing path means an empty book.
pub fn load_book(path: Option<&Path>) -> Result<Vec<Appointment>> {
    match path {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read file: {}", path.display()))?;
            parse_book(&json).with_context(|| format!("Failed to parse book: {}", path.display()))
        }
        None => Ok(Vec::new()),
    }
}
