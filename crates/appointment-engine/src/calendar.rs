//! Calendar views over an appointment list.
//!
//! Month and ISO-week filters read each appointment's start in the given
//! zone, so an appointment late on the 31st in New York is still in that
//! month even if it is already the 1st in UTC.

use chrono::Datelike;
use chrono_tz::Tz;

use crate::appointment::{Appointment, CustomerId};
use crate::interval::TimeInterval;

/// The intervals of every appointment booked for `customer_id`, in input order.
pub fn intervals_for_customer(appointments: &[Appointment], customer_id: CustomerId) -> Vec<TimeInterval> {
    appointments
        .iter()
        .filter(|appointment| appointment.customer_id == customer_id)
        .map(|appointment| appointment.interval)
        .collect()
}

/// Appointments starting in `month` (1-12) of `year`, read in `zone`.
pub fn in_month(appointments: &[Appointment], year: i32, month: u32, zone: Tz) -> Vec<&Appointment> {
    appointments
        .iter()
        .filter(|appointment| {
            let start = appointment.interval.start.in_zone(&zone);
            start.year() == year && start.month() == month
        })
        .collect()
}

/// Appointments starting in ISO week `week` of ISO year `iso_year`, read in `zone`.
pub fn in_iso_week(appointments: &[Appointment], iso_year: i32, week: u32, zone: Tz) -> Vec<&Appointment> {
    appointments
        .iter()
        .filter(|appointment| {
            let iso = appointment.interval.start.in_zone(&zone).iso_week();
            iso.year() == iso_year && iso.week() == week
        })
        .collect()
}
