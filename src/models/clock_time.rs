use serde::Serialize;
use std::fmt;

/// Wall-clock time supplied by the caller.
///
/// Fields are signed and unchecked: values outside 0-23 / 0-59 are kept
/// and roll over into neighbouring hours or days once anchored to a date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ClockTime {
    pub hour: i32,
    #[serde(rename = "minutes")]
    pub minute: i32,
}

impl ClockTime {
    pub fn new(hour: i32, minute: i32) -> Self {
        Self { hour, minute }
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}
