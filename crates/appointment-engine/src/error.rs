//! Error types for appointment-engine operations.
//!
//! Only genuine input-format faults are errors. Business-rule rejections are
//! ordinary values, see [`crate::validate::ValidationOutcome`].

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Malformed time input: {0}")]
    MalformedTimeInput(String),

    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    #[error("Invalid business hours: {0}")]
    InvalidBusinessHours(String),
}

pub type Result<T> = std::result::Result<T, EngineError>;
