use chrono::Duration;
use rworktime::core::calculator::clipper::clip_interval;
use rworktime::core::calculator::window::{at_time, lunch_boundary};
use rworktime::models::work_time::{Interval, LunchWindow};

mod common;
use common::{at, day};

#[test]
fn test_at_time_on_same_day() {
    assert_eq!(at_time(day(2025, 1, 15), 9, 0, 0), at(2025, 1, 15, 9, 0));
    assert_eq!(at_time(day(2025, 1, 15), 17, 45, 0), at(2025, 1, 15, 17, 45));
}

#[test]
fn test_at_time_rolls_over() {
    let d = day(2025, 1, 15);
    assert_eq!(at_time(d, 25, 0, 0), at(2025, 1, 16, 1, 0));
    assert_eq!(at_time(d, 9, 75, 0), at(2025, 1, 15, 10, 15));
    assert_eq!(at_time(d, 8, -15, 0), at(2025, 1, 15, 7, 45));
    assert_eq!(at_time(d, -1, 0, 0), at(2025, 1, 14, 23, 0));
    assert_eq!(at_time(day(2024, 12, 31), 24, 0, 0), at(2025, 1, 1, 0, 0));
}

#[test]
fn test_lunch_boundaries_by_season() {
    assert_eq!(lunch_boundary(day(2025, 1, 15), true), at(2025, 1, 15, 12, 0));
    assert_eq!(lunch_boundary(day(2025, 1, 15), false), at(2025, 1, 15, 13, 0));
    assert_eq!(lunch_boundary(day(2025, 7, 10), true), at(2025, 7, 10, 12, 30));
    assert_eq!(lunch_boundary(day(2025, 7, 10), false), at(2025, 7, 10, 13, 30));
}

#[test]
fn test_lunch_window_is_always_one_hour() {
    for m in 1..=12 {
        let w = LunchWindow::for_day(day(2025, m, 1));
        assert_eq!(w.end - w.start, Duration::minutes(60));
    }
}

#[test]
fn test_lunch_window_contains_is_inclusive() {
    let w = LunchWindow::for_day(day(2025, 1, 15));
    assert!(w.contains(at(2025, 1, 15, 12, 0)));
    assert!(w.contains(at(2025, 1, 15, 12, 30)));
    assert!(w.contains(at(2025, 1, 15, 13, 0)));
    assert!(!w.contains(at(2025, 1, 15, 11, 59)));
    assert!(!w.contains(at(2025, 1, 15, 13, 1)));
    // same clock time, other day
    assert!(!w.contains(at(2025, 1, 16, 12, 30)));
}

fn raw(start: chrono::NaiveDateTime, end: chrono::NaiveDateTime) -> Interval {
    Interval { start, end }
}

#[test]
fn test_clip_start_before_floor() {
    let d = day(2025, 1, 15);
    let c = clip_interval(raw(at(2025, 1, 15, 7, 30), at(2025, 1, 15, 18, 0)), d, d, false);
    assert_eq!(c.start, at(2025, 1, 15, 9, 0));
    assert_eq!(c.end, at(2025, 1, 15, 18, 0));
}

#[test]
fn test_clip_start_inside_lunch_moves_after_it() {
    let d = day(2025, 1, 15);
    for (h, m) in [(12, 0), (12, 30), (13, 0)] {
        let c = clip_interval(raw(at(2025, 1, 15, h, m), at(2025, 1, 15, 18, 0)), d, d, false);
        assert_eq!(c.start, at(2025, 1, 15, 13, 0), "start {h}:{m}");
    }

    let summer = day(2025, 7, 10);
    let c = clip_interval(
        raw(at(2025, 7, 10, 12, 45), at(2025, 7, 10, 18, 0)),
        summer,
        summer,
        false,
    );
    assert_eq!(c.start, at(2025, 7, 10, 13, 30));
}

#[test]
fn test_clip_end_inside_lunch_moves_before_it() {
    let d = day(2025, 1, 15);
    for (h, m) in [(12, 0), (12, 30), (13, 0)] {
        let c = clip_interval(raw(at(2025, 1, 15, 9, 0), at(2025, 1, 15, h, m)), d, d, false);
        assert_eq!(c.end, at(2025, 1, 15, 12, 0), "end {h}:{m}");
    }
}

#[test]
fn test_clip_leaves_outside_values_untouched() {
    let d = day(2025, 1, 15);
    let r = raw(at(2025, 1, 15, 9, 0), at(2025, 1, 15, 11, 59));
    assert_eq!(clip_interval(r, d, d, false), r);
}

#[test]
fn test_clip_crossing_end_uses_end_day_lunch() {
    let start_day = day(2025, 7, 9);
    let end_day = day(2025, 7, 10);
    let c = clip_interval(
        raw(at(2025, 7, 9, 22, 0), at(2025, 7, 10, 13, 0)),
        start_day,
        end_day,
        true,
    );
    assert_eq!(c.start, at(2025, 7, 9, 22, 0));
    assert_eq!(c.end, at(2025, 7, 10, 12, 30));
}

#[test]
fn test_clip_crossing_end_falls_back_to_start_day_lunch() {
    // end rolled back onto the start day's lunch
    let start_day = day(2025, 1, 14);
    let end_day = day(2025, 1, 15);
    let c = clip_interval(
        raw(at(2025, 1, 14, 9, 0), at(2025, 1, 14, 12, 30)),
        start_day,
        end_day,
        true,
    );
    assert_eq!(c.end, at(2025, 1, 14, 12, 0));
}

#[test]
fn test_clip_without_crossing_ignores_end_day_lunch() {
    // same-day anchors: only the start-day rule applies to the end
    let d = day(2025, 1, 15);
    let c = clip_interval(raw(at(2025, 1, 15, 9, 0), at(2025, 1, 15, 12, 15)), d, d, false);
    assert_eq!(c.end, at(2025, 1, 15, 12, 0));
}

#[test]
fn test_at_time_saturates_past_calendar_range() {
    use chrono::{NaiveDate, NaiveDateTime};

    assert_eq!(at_time(NaiveDate::MAX, 25, 0, 0), NaiveDateTime::MAX);
    assert_eq!(at_time(NaiveDate::MIN, -1, 0, 0), NaiveDateTime::MIN);
    assert_eq!(at_time(day(2025, 1, 15), i64::MAX, i64::MAX, 0), NaiveDateTime::MAX);
    assert_eq!(at_time(day(2025, 1, 15), i64::MIN, 0, 0), NaiveDateTime::MIN);
    // inside the range nothing changes
    assert_eq!(at_time(NaiveDate::MAX, 13, 30, 0), NaiveDate::MAX.and_hms_opt(13, 30, 0).unwrap());
}
