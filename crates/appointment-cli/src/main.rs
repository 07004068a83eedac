//! `appointments` CLI — validate proposed appointments and scan a book for
//! imminent ones.
//!
//! ## Usage
//!
//! ```sh
//! # Would 09:30-10:30 Eastern on 2024-03-04 fit customer 7's schedule?
//! appointments validate --book book.json --customer 7 \
//!     --date 2024-03-04 --start 09:30:00 --end 10:30:00 --zone America/New_York
//!
//! # Same, but moving appointment 12 (excluded from its own overlap check)
//! appointments validate --book book.json --customer 7 --editing 12 \
//!     --date 2024-03-04 --start 10:30 --end 11:30
//!
//! # Anything starting in the next 15 minutes?
//! appointments upcoming --book book.json
//!
//! # Everything in March 2024, or in ISO week 10
//! appointments list --book book.json --year 2024 --month 3
//! appointments list --book book.json --year 2024 --week 10
//! ```
//!
//! Business hours, the default input zone and the lookahead window come from
//! `APPOINTMENTS_*` environment variables (see `config.rs`).

mod book;
mod config;

use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use appointment_engine::{
    check_appointment, find_upcoming, in_iso_week, in_month, normalize_str, parse_zone,
    AppointmentId, CustomerId, Instant, TimeInterval,
};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use serde_json::json;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::book::{load_book, BookEntry};
use crate::config::{lookahead_minutes, Config};

/// Exit status for a proposal that was rejected by a business rule.
const EXIT_REJECTED: i32 = 2;

#[derive(Parser)]
#[command(
    name = "appointments",
    version,
    about = "Appointment business-hours and overlap validation"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a proposed appointment for a customer
    Validate {
        /// Appointment book (JSON); an empty book if omitted
        #[arg(short, long)]
        book: Option<PathBuf>,
        /// Customer the appointment is for
        #[arg(short, long)]
        customer: u64,
        /// Calendar date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Start wall-clock time (HH:mm:ss)
        #[arg(long)]
        start: String,
        /// End wall-clock time (HH:mm:ss)
        #[arg(long)]
        end: String,
        /// Zone the wall-clock times are read in (defaults to APPOINTMENTS_LOCAL_ZONE)
        #[arg(short, long)]
        zone: Option<String>,
        /// ID of the appointment being edited; its stored interval is excluded
        #[arg(long)]
        editing: Option<u64>,
    },
    /// Show the soonest appointment starting within the lookahead window
    Upcoming {
        /// Appointment book (JSON)
        #[arg(short, long)]
        book: PathBuf,
        /// Reference time (RFC 3339); defaults to the current time
        #[arg(long)]
        now: Option<String>,
        /// Lookahead in minutes (defaults to APPOINTMENTS_LOOKAHEAD_MINUTES)
        #[arg(long)]
        lookahead: Option<i64>,
    },
    /// List appointments in a month or ISO week
    List {
        /// Appointment book (JSON)
        #[arg(short, long)]
        book: PathBuf,
        /// Calendar year (ISO year when used with --week)
        #[arg(long)]
        year: i32,
        /// Month number (1-12)
        #[arg(long, conflicts_with = "week", required_unless_present = "week")]
        month: Option<u32>,
        /// ISO week number (1-53)
        #[arg(long)]
        week: Option<u32>,
        /// Zone the start times are read in (defaults to APPOINTMENTS_LOCAL_ZONE)
        #[arg(short, long)]
        zone: Option<String>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("appointment_engine=info,appointments=info")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::from_env().context("Failed to load configuration")?;
    debug!(?config, "configuration loaded");

    match cli.command {
        Commands::Validate {
            book,
            customer,
            date,
            start,
            end,
            zone,
            editing,
        } => {
            let book = load_book(book.as_deref())?;
            let zone_name = zone.unwrap_or_else(|| config.local_zone.name().to_string());

            let proposed = TimeInterval::new(
                normalize_str(&date, &start, &zone_name).context("Invalid start time")?,
                normalize_str(&date, &end, &zone_name).context("Invalid end time")?,
            );
            let customer_id = CustomerId(customer);
            let editing = editing.map(AppointmentId);

            let verdict =
                check_appointment(&proposed, customer_id, &config.policy, &book, editing);
            let outcome = verdict.outcome;

            let mut report = json!({
                "outcome": outcome,
                "start": proposed.start.utc(),
                "end": proposed.end.utc(),
            });
            if let Some(conflict) = &verdict.conflict {
                report["conflict"] = json!({
                    "appointment_id": verdict.conflicting_appointment,
                    "kind": conflict.kind,
                    "overlap_minutes": conflict.overlap_minutes,
                });
            }
            println!("{}", serde_json::to_string_pretty(&report)?);

            if !outcome.is_accepted() {
                info!(customer, ?outcome, "appointment rejected");
                process::exit(EXIT_REJECTED);
            }
        }
        Commands::Upcoming {
            book,
            now,
            lookahead,
        } => {
            let book = load_book(Some(book.as_path()))?;
            let now = match now {
                Some(text) => DateTime::parse_from_rfc3339(&text)
                    .with_context(|| format!("Invalid --now value: {}", text))?
                    .with_timezone(&Utc),
                None => Utc::now(),
            };
            let lookahead = match lookahead {
                Some(minutes) => lookahead_minutes(minutes).context("Invalid --lookahead")?,
                None => config.lookahead,
            };

            let found = find_upcoming(&Instant::from_utc(now), &book, lookahead);
            let output = match found {
                Some(appointment) => serde_json::to_value(BookEntry::from(appointment))?,
                None => serde_json::Value::Null,
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        Commands::List {
            book,
            year,
            month,
            week,
            zone,
        } => {
            let book = load_book(Some(book.as_path()))?;
            let zone = match zone {
                Some(name) => parse_zone(&name).context("Invalid --zone")?,
                None => config.local_zone,
            };

            let found = match (month, week) {
                (Some(month), _) => in_month(&book, year, month, zone),
                (None, Some(week)) => in_iso_week(&book, year, week, zone),
                (None, None) => anyhow::bail!("one of --month or --week is required"),
            };
            let entries: Vec<BookEntry> = found.into_iter().map(BookEntry::from).collect();
            println!("{}", serde_json::to_string_pretty(&entries)?);
        }
    }

    Ok(())
}
