use crate::config::SeasonLabels;
use crate::models::season::SeasonInfo;
use chrono::NaiveDateTime;
use serde::Serialize;

/// Worked time split into hours and minutes.
///
/// Negative durations are kept as-is: `hours` is floored, `minutes`
/// carries the sign of the total (e.g. -30 min → -1h -30m).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct WorkTime {
    pub hours: i64,
    pub minutes: i64,
}

impl WorkTime {
    pub fn from_minutes(total: i64) -> Self {
        Self {
            hours: total.div_euclid(60),
            minutes: total % 60,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkDurationResult {
    pub work_time: WorkTime,
    pub season_info: SeasonInfo,
}

/// Lunch window of one calendar day. Both bounds belong to the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LunchWindow {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl LunchWindow {
    /// True when `point` equals a bound or lies strictly between them.
    pub fn contains(&self, point: NaiveDateTime) -> bool {
        point == self.start || point == self.end || (point > self.start && point < self.end)
    }
}

/// A start/end pair of instants (raw request or clipped).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Interval {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

/// Every intermediate value of one work duration computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkDurationBreakdown {
    pub raw: Interval,
    pub clipped: Interval,
    pub today_lunch: LunchWindow,
    pub next_day_lunch: LunchWindow,
    pub crossing: bool,
    pub total_minutes: i64,
    pub break_minutes: i64,
    pub extra_break_minutes: i64,
    pub worked_minutes: i64,
    pub result: WorkDurationResult,
}

// ---------------------------
// Wire shape for callers
// ---------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonReport {
    pub season_text: String,
    pub is_winter: bool,
    pub season_hour: i64,
    pub season_minutes: i64,
}

/// `{ workTime, seasonInfo }` as consumed by the display layer, with the
/// season label resolved from the configured labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkTimeReport {
    pub work_time: WorkTime,
    pub season_info: SeasonReport,
}

impl WorkTimeReport {
    pub fn new(result: &WorkDurationResult, labels: &SeasonLabels) -> Self {
        let info = &result.season_info;
        Self {
            work_time: result.work_time,
            season_info: SeasonReport {
                season_text: labels.label(info.season).to_string(),
                is_winter: info.is_winter,
                season_hour: info.break_hours,
                season_minutes: info.break_minutes,
            },
        }
    }
}
