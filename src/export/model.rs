// src/export/model.rs

use crate::core::calculator::cycle::CycleWindow;
use crate::models::interval::Interval;
use serde::Serialize;

const TS_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Flat interval row for CSV / JSON export.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct IntervalExport {
    pub unit: String,
    pub phase: String,
    pub start: String,
    pub end: String,
    pub duration_minutes: i64,
    pub program: String,
    pub cycle_start: String,
    pub cycle_end: String,
}

impl IntervalExport {
    pub fn from_interval(iv: &Interval, window: &CycleWindow) -> Self {
        let (cs, ce) = window.remap_interval(iv);
        Self {
            unit: iv.unit.label(),
            phase: iv.phase.as_str().to_string(),
            start: iv.start.format(TS_FORMAT).to_string(),
            end: iv.end.format(TS_FORMAT).to_string(),
            duration_minutes: iv.duration_minutes(),
            program: iv.program.clone().unwrap_or_default(),
            cycle_start: cs.format(TS_FORMAT).to_string(),
            cycle_end: ce.format(TS_FORMAT).to_string(),
        }
    }
}
