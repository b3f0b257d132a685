use crate::errors::{AppError, AppResult};
use chrono::{NaiveDate, NaiveDateTime};

pub fn parse_date(s: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| AppError::InvalidDate(s.into()))
}

/// Parse a `--now` override.
///
/// Accepts `YYYY-MM-DD HH:MM[:SS]`, the same with a `T` separator, or a bare
/// date (taken at 12:00, away from both midnights).
pub fn parse_datetime(s: &str) -> AppResult<NaiveDateTime> {
    let s = s.trim();

    for fmt in [
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M",
    ] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Ok(dt);
        }
    }

    parse_date(s)?
        .and_hms_opt(12, 0, 0)
        .ok_or_else(|| AppError::InvalidDate(s.into()))
}

/// First day of every month of `year`.
pub fn months_of_year(year: i32) -> AppResult<Vec<NaiveDate>> {
    (1..=12)
        .map(|m| {
            NaiveDate::from_ymd_opt(year, m, 1)
                .ok_or_else(|| AppError::InvalidDate(format!("{year}-{m:02}")))
        })
        .collect()
}
