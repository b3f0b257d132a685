use crate::core::calculator::clipper::clip_interval;
use crate::core::calculator::season::resolve_season;
use crate::core::calculator::window::at_time;
use crate::core::clock::Clock;
use crate::models::clock_time::ClockTime;
use crate::models::work_time::{
    Interval, LunchWindow, WorkDurationBreakdown, WorkDurationResult, WorkTime,
};
use chrono::NaiveDate;
use tracing::debug;

/// Worked time between two clock times of "today", net of lunch.
///
/// With `crossing` the start belongs to yesterday and the end to today
/// (overnight shift); a second lunch break is deducted when the end passes
/// today's lunch window.
#[derive(Debug, Clone, Copy, Default)]
pub struct WorkDurationCalculator<C> {
    clock: C,
}

impl<C: Clock> WorkDurationCalculator<C> {
    pub fn new(clock: C) -> Self {
        Self { clock }
    }

    pub fn compute_work_time(
        &self,
        work_start: ClockTime,
        work_end: ClockTime,
        crossing: bool,
    ) -> WorkDurationResult {
        self.compute_breakdown(work_start, work_end, crossing).result
    }

    pub fn compute_breakdown(
        &self,
        work_start: ClockTime,
        work_end: ClockTime,
        crossing: bool,
    ) -> WorkDurationBreakdown {
        debug!(%work_start, %work_end, crossing, "computing work duration");

        let today = self.clock.now().date();
        // the first representable day has no yesterday; stay on it
        let yesterday = today.pred_opt().unwrap_or(today);

        let end_day = today;
        let start_day = if crossing { yesterday } else { today };

        compute_for_days(work_start, work_end, start_day, end_day, crossing)
    }
}

/// Same computation with explicit anchor days instead of a clock.
pub fn compute_for_days(
    work_start: ClockTime,
    work_end: ClockTime,
    start_day: NaiveDate,
    end_day: NaiveDate,
    crossing: bool,
) -> WorkDurationBreakdown {
    let raw = Interval {
        start: at_time(
            start_day,
            i64::from(work_start.hour),
            i64::from(work_start.minute),
            0,
        ),
        end: at_time(
            end_day,
            i64::from(work_end.hour),
            i64::from(work_end.minute),
            0,
        ),
    };

    let clipped = clip_interval(raw, start_day, end_day, crossing);

    // season follows the clipped start, not the requested one
    let season_info = resolve_season(&clipped.start);
    let full_break = season_info.break_duration_minutes();

    // floor to whole minutes
    let total_minutes = (clipped.end - clipped.start).num_seconds().div_euclid(60);

    let today_lunch = LunchWindow::for_day(start_day);
    let next_day_lunch = LunchWindow::for_day(end_day);

    let break_minutes = if clipped.start == clipped.end
        || today_lunch.contains(clipped.start)
        || today_lunch.contains(clipped.end)
    {
        0
    } else {
        full_break
    };

    let mut extra_break_minutes = 0;
    if crossing && clipped.end > clipped.start {
        if next_day_lunch.contains(clipped.end) {
            // end was already pulled back before the second lunch
            extra_break_minutes = 0;
        } else if clipped.end > next_day_lunch.end {
            extra_break_minutes = full_break;
        }
    }

    let worked_minutes = total_minutes - break_minutes - extra_break_minutes;

    debug!(
        total_minutes,
        break_minutes, extra_break_minutes, worked_minutes, "work duration computed"
    );

    WorkDurationBreakdown {
        raw,
        clipped,
        today_lunch,
        next_day_lunch,
        crossing,
        total_minutes,
        break_minutes,
        extra_break_minutes,
        worked_minutes,
        result: WorkDurationResult {
            work_time: WorkTime::from_minutes(worked_minutes),
            season_info,
        },
    }
}
