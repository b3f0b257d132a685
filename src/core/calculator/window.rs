//! Building instants on a calendar day: arbitrary times of day and the
//! seasonal lunch window boundaries.

use crate::core::calculator::season::resolve_season;
use crate::models::work_time::LunchWindow;
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

pub const LUNCH_START_HOUR: i64 = 12;
pub const LUNCH_END_HOUR: i64 = 13;

/// Earliest instant work may start counting from.
pub const WORKDAY_FLOOR_HOUR: i64 = 9;

/// Instant at `hour:minute:second` on `base_day`.
///
/// Counts from midnight, so out-of-range components roll over
/// (25:00 is 01:00 of the following day, 08:-15 is 07:45). Results past
/// the representable range saturate at `NaiveDateTime::MIN`/`MAX`.
pub fn at_time(base_day: NaiveDate, hour: i64, minute: i64, second: i64) -> NaiveDateTime {
    let offset_secs =
        i128::from(hour) * 3600 + i128::from(minute) * 60 + i128::from(second);
    let saturated = if offset_secs < 0 {
        NaiveDateTime::MIN
    } else {
        NaiveDateTime::MAX
    };

    i64::try_from(offset_secs)
        .ok()
        .and_then(Duration::try_seconds)
        .and_then(|offset| base_day.and_time(NaiveTime::MIN).checked_add_signed(offset))
        .unwrap_or(saturated)
}

/// Start (or end) of the lunch break on `base_day`, shifted by the
/// season of that same day.
pub fn lunch_boundary(base_day: NaiveDate, is_start: bool) -> NaiveDateTime {
    let offset = resolve_season(&base_day).break_minutes;
    let hour = if is_start {
        LUNCH_START_HOUR
    } else {
        LUNCH_END_HOUR
    };

    at_time(base_day, hour, offset, 0)
}

impl LunchWindow {
    pub fn for_day(base_day: NaiveDate) -> Self {
        Self {
            start: lunch_boundary(base_day, true),
            end: lunch_boundary(base_day, false),
        }
    }
}
