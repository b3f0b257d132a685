//! Time utilities: parsing H:MM inputs, formatting minutes.

use crate::errors::{AppError, AppResult};
use crate::models::clock_time::ClockTime;

/// Parse `H:MM` / `HH:MM` into a ClockTime.
///
/// Only the shape is checked: each component may be any integer
/// (`25:00`, `8:75`, `-1:30`) and is left to roll over later.
pub fn parse_clock_time(t: &str) -> AppResult<ClockTime> {
    let invalid = || AppError::InvalidTime(t.to_string());

    let (h, m) = t.trim().split_once(':').ok_or_else(invalid)?;
    let hour = h.trim().parse::<i32>().map_err(|_| invalid())?;
    let minute = m.trim().parse::<i32>().map_err(|_| invalid())?;

    Ok(ClockTime::new(hour, minute))
}

pub fn format_minutes(mins: i64) -> String {
    let sign = if mins < 0 { "-" } else { "" };
    let m = mins.abs();
    format!("{}{:02}:{:02}", sign, m / 60, m % 60)
}
