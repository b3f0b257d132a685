//! Clip a requested interval against the 09:00 floor and the lunch windows.

use crate::core::calculator::window::{WORKDAY_FLOOR_HOUR, at_time};
use crate::models::work_time::{Interval, LunchWindow};
use chrono::NaiveDate;
use tracing::debug;

/// Clip `raw` in this order:
///  1. a start before 09:00 of `start_day` moves to 09:00
///  2. a start inside the start-day lunch moves to the end of that lunch
///  3. crossing only: an end inside the end-day lunch moves to its start
///  4. otherwise an end inside the start-day lunch moves to its start
pub fn clip_interval(
    raw: Interval,
    start_day: NaiveDate,
    end_day: NaiveDate,
    crossing: bool,
) -> Interval {
    let mut start = raw.start;
    let mut end = raw.end;

    let floor = at_time(start_day, WORKDAY_FLOOR_HOUR, 0, 0);
    if start < floor {
        debug!(%start, %floor, "start before workday floor");
        start = floor;
    }

    let today_lunch = LunchWindow::for_day(start_day);
    if today_lunch.contains(start) {
        debug!(%start, to = %today_lunch.end, "start inside lunch, moved after it");
        start = today_lunch.end;
    }

    let next_day_lunch = LunchWindow::for_day(end_day);
    if crossing && next_day_lunch.contains(end) {
        debug!(%end, to = %next_day_lunch.start, "end inside next-day lunch, moved before it");
        end = next_day_lunch.start;
    } else if today_lunch.contains(end) {
        debug!(%end, to = %today_lunch.start, "end inside lunch, moved before it");
        end = today_lunch.start;
    }

    Interval { start, end }
}
