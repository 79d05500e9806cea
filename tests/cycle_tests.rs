mod common;
use chrono::{Duration, NaiveTime, Timelike};
use common::{date, dt, ev, oven, series};
use ovenlog::models::event_kind::EventKind;
use ovenlog::{CycleWindow, compute_cycle_window, remap_to_cycle};

#[test]
fn test_cycle_starts_previous_evening_when_first_event_is_before_22() {
    let w = CycleWindow::containing(dt("2025-10-25 10:00"));
    assert_eq!(w.start, dt("2025-10-24 22:00"));
    assert_eq!(w.end, dt("2025-10-25 22:00"));
}

#[test]
fn test_cycle_starts_same_evening_from_22_onwards() {
    let w = CycleWindow::containing(dt("2025-10-25 22:00"));
    assert_eq!(w.start, dt("2025-10-25 22:00"));

    let w = CycleWindow::containing(dt("2025-10-25 23:59:59"));
    assert_eq!(w.start, dt("2025-10-25 22:00"));
    assert_eq!(w.end, dt("2025-10-26 22:00"));

    let w = CycleWindow::containing(dt("2025-10-25 21:59:59"));
    assert_eq!(w.start, dt("2025-10-24 22:00"));
}

#[test]
fn test_window_uses_earliest_event() {
    let a = oven("1");
    let s = series(vec![
        ev(0, &a, "12:00", EventKind::Other),
        ev(1, &a, "10:00", EventKind::Other),
        ev(2, &a, "23:15", EventKind::Other),
    ]);
    let w = compute_cycle_window(&s);
    assert_eq!(w.start, dt("2025-10-24 22:00"));
}

#[test]
fn test_window_is_always_24h_anchored_at_22() {
    let anchor = NaiveTime::from_hms_opt(22, 0, 0).expect("valid time");
    let mut t = dt("2024-02-27 00:00");
    while t < dt("2024-03-03 00:00") {
        let w = CycleWindow::containing(t);
        assert_eq!(w.end - w.start, Duration::hours(24));
        assert_eq!(w.start.time(), anchor);
        assert!(w.start <= t && t < w.end, "{t} outside {w:?}");
        t += Duration::minutes(37);
    }
}

#[test]
fn test_remap_scenario() {
    let w = CycleWindow::containing(dt("2025-10-25 10:00"));
    let d = w.start_date();
    assert_eq!(d, date("2025-10-24"));

    assert_eq!(remap_to_cycle(dt("2025-10-25 23:15"), d), dt("2025-10-24 23:15"));
    assert_eq!(remap_to_cycle(dt("2025-10-25 05:00"), d), dt("2025-10-25 05:00"));
}

#[test]
fn test_remap_keeps_time_and_is_idempotent() {
    let d = date("2025-10-24");
    let samples = [
        "2025-10-20 00:00:00",
        "2025-10-24 21:59:59",
        "2025-10-24 22:00:00",
        "2025-10-26 23:59:59",
        "2025-11-30 13:37:42",
    ];

    for s in samples {
        let ts = dt(s);
        let once = remap_to_cycle(ts, d);
        assert_eq!(once.time(), ts.time());
        assert_eq!(once.hour(), ts.hour());
        assert_eq!(remap_to_cycle(once, d), once);
    }
}

#[test]
fn test_remap_keeps_fraction() {
    let ts = dt("2025-10-26 03:04:05") + Duration::milliseconds(250);
    let out = remap_to_cycle(ts, date("2025-10-24"));
    assert_eq!(out.nanosecond(), 250_000_000);
    assert_eq!(out, dt("2025-10-25 03:04:05") + Duration::milliseconds(250));
}

#[test]
fn test_remap_across_year_boundary() {
    let d = date("2024-12-31");
    assert_eq!(remap_to_cycle(dt("2025-01-03 05:00"), d), dt("2025-01-01 05:00"));
    assert_eq!(remap_to_cycle(dt("2025-01-03 22:30"), d), dt("2024-12-31 22:30"));
}

#[test]
fn test_describe_window() {
    let w = CycleWindow::containing(dt("2025-10-25 10:00"));
    assert_eq!(w.describe(), "24.10. 22:00 bis 25.10. 22:00");
}
