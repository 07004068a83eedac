//! Startup configuration, read from the environment (and an optional `.env`).

use std::env;

use anyhow::{Context, Result};
use appointment_engine::hours::{DEFAULT_CLOSING, DEFAULT_OPENING, DEFAULT_ZONE};
use appointment_engine::{parse_wall_clock, parse_zone, BusinessHoursPolicy, DEFAULT_LOOKAHEAD_MINUTES};
use chrono::Duration;
use chrono_tz::Tz;

#[derive(Debug, Clone)]
pub struct Config {
    /// Business-hours window every appointment must fit in.
    pub policy: BusinessHoursPolicy,
    /// Zone wall-clock input is read in when `--zone` is not given.
    pub local_zone: Tz,
    /// How far ahead `upcoming` looks.
    pub lookahead: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // Load .env if present, ignore if missing
        Self::from_getter(|key| env::var(key).ok())
    }

    /// Parse config from a custom getter function (for testing)
    pub fn from_getter<F>(get: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| get(key).filter(|v| !v.trim().is_empty());

        let zone = match get("APPOINTMENTS_BUSINESS_ZONE") {
            Some(name) => parse_zone(&name).context("APPOINTMENTS_BUSINESS_ZONE must be an IANA zone")?,
            None => DEFAULT_ZONE,
        };
        let opening = match get("APPOINTMENTS_OPENING") {
            Some(text) => parse_wall_clock(&text).context("APPOINTMENTS_OPENING must be HH:mm:ss")?,
            None => DEFAULT_OPENING,
        };
        let closing = match get("APPOINTMENTS_CLOSING") {
            Some(text) => parse_wall_clock(&text).context("APPOINTMENTS_CLOSING must be HH:mm:ss")?,
            None => DEFAULT_CLOSING,
        };
        let policy = BusinessHoursPolicy::new(zone, opening, closing)
            .context("APPOINTMENTS_OPENING must be before APPOINTMENTS_CLOSING")?;

        let local_zone = match get("APPOINTMENTS_LOCAL_ZONE") {
            Some(name) => parse_zone(&name).context("APPOINTMENTS_LOCAL_ZONE must be an IANA zone")?,
            None => Tz::UTC,
        };

        let lookahead = match get("APPOINTMENTS_LOOKAHEAD_MINUTES") {
            Some(text) => {
                let minutes: i64 = text
                    .trim()
                    .parse()
                    .context("APPOINTMENTS_LOOKAHEAD_MINUTES must be a whole number of minutes")?;
                lookahead_minutes(minutes).context("APPOINTMENTS_LOOKAHEAD_MINUTES is invalid")?
            }
            None => Duration::minutes(DEFAULT_LOOKAHEAD_MINUTES),
        };

        Ok(Config {
            policy,
            local_zone,
            lookahead,
        })
    }
}

/// A lookahead window of `minutes`, refusing values chrono cannot represent.
pub fn lookahead_minutes(minutes: i64) -> Result<Duration> {
    Duration::try_minutes(minutes)
        .with_context(|| format!("lookahead of {} minutes is out of range", minutes))
}
