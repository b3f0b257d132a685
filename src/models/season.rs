use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Winter, // Jan-Apr, Oct-Dec
    Summer, // May-Sep
}

/// Season of a calendar date together with the lunch break it implies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonInfo {
    pub season: Season,
    pub is_winter: bool,
    pub break_hours: i64,
    pub break_minutes: i64,
}

impl SeasonInfo {
    /// Full lunch break length in minutes.
    pub fn break_duration_minutes(&self) -> i64 {
        self.break_hours * 60 + self.break_minutes
    }
}
