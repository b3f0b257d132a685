//! Season policy: which lunch schedule applies on a given date.
//!
//! May to September is "summer": lunch runs 12:30-13:30 and counts as 90
//! minutes of break. The rest of the year is "winter": 12:00-13:00, 60
//! minutes.

use crate::models::season::{Season, SeasonInfo};
use chrono::Datelike;

/// Lunch break hours, identical in both seasons.
pub const BREAK_HOURS: i64 = 1;

/// Extra break minutes (and lunch window shift) during summer.
pub const SUMMER_BREAK_MINUTES: i64 = 30;

pub fn is_winter_month(month: u32) -> bool {
    !(5..=9).contains(&month)
}

/// Resolve the season of any date-carrying value (date or datetime).
pub fn resolve_season<D: Datelike>(reference: &D) -> SeasonInfo {
    let is_winter = is_winter_month(reference.month());

    SeasonInfo {
        season: if is_winter {
            Season::Winter
        } else {
            Season::Summer
        },
        is_winter,
        break_hours: BREAK_HOURS,
        break_minutes: if is_winter { 0 } else { SUMMER_BREAK_MINUTES },
    }
}
