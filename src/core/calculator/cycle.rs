//! 24h operating cycle anchored at 22:00.
//!
//! Ovens are loaded in the evening and run through the night, so the display
//! day goes from 22:00 to 22:00 instead of midnight to midnight. Remapping only
//! changes the calendar date and must run after phase extraction.

use crate::models::event::EventSeries;
use crate::models::interval::Interval;
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::Serialize;

pub const CYCLE_ANCHOR_HOUR: u32 = 22;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CycleWindow {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl CycleWindow {
    /// Window containing `t0`: starts at the last 22:00 at or before it.
    pub fn containing(t0: NaiveDateTime) -> Self {
        let anchor = NaiveTime::from_hms_opt(CYCLE_ANCHOR_HOUR, 0, 0).unwrap_or(NaiveTime::MIN);
        let base = t0.date().and_time(anchor);

        let start = if t0.hour() < CYCLE_ANCHOR_HOUR {
            base - Duration::hours(24)
        } else {
            base
        };

        Self {
            start,
            end: start + Duration::hours(24),
        }
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start.date()
    }

    pub fn remap(&self, ts: NaiveDateTime) -> NaiveDateTime {
        remap_to_cycle(ts, self.start_date())
    }

    /// Interval endpoints projected into the window, (start, end).
    pub fn remap_interval(&self, iv: &Interval) -> (NaiveDateTime, NaiveDateTime) {
        (self.remap(iv.start), self.remap(iv.end))
    }

    /// Human label, e.g. `24.10. 22:00 bis 25.10. 22:00`.
    pub fn describe(&self) -> String {
        format!(
            "{} bis {}",
            self.start.format("%d.%m. %H:%M"),
            self.end.format("%d.%m. %H:%M")
        )
    }
}

pub fn compute_cycle_window(series: &EventSeries) -> CycleWindow {
    CycleWindow::containing(series.min_timestamp())
}

/// Project `ts` onto the cycle's display dates: 22:00-23:59 lands on the cycle
/// start date, everything else on the following day. Time of day is kept.
pub fn remap_to_cycle(ts: NaiveDateTime, cycle_start_date: NaiveDate) -> NaiveDateTime {
    let date = if ts.hour() >= CYCLE_ANCHOR_HOUR {
        cycle_start_date
    } else {
        cycle_start_date
            .succ_opt()
            .unwrap_or(cycle_start_date)
    };
    date.and_time(ts.time())
}
