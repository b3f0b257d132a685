//! Formatting utilities used for CLI outputs.

use crate::models::work_time::WorkTime;
use chrono::NaiveDateTime;

pub fn bold(s: &str, enabled: bool) -> String {
    if enabled {
        format!("\x1b[1m{}\x1b[0m", s)
    } else {
        s.to_string()
    }
}

/// `08h 30m`.
///
/// Negative results are printed field by field (`-1h -30m`) since hours
/// and minutes do not share the same rounding.
pub fn work_time_readable(wt: &WorkTime) -> String {
    if wt.hours < 0 || wt.minutes < 0 {
        format!("{}h {}m", wt.hours, wt.minutes)
    } else {
        format!("{:02}h {:02}m", wt.hours, wt.minutes)
    }
}

/// `2025-01-15 13:00`
pub fn instant_readable(at: &NaiveDateTime) -> String {
    at.format("%Y-%m-%d %H:%M").to_string()
}
