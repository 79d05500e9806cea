use super::unit::UnitId;
use chrono::NaiveDateTime;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
pub enum Phase {
    Preheat,
    Run,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Preheat => "preheat",
            Phase::Run => "run",
        }
    }
}

/// A recovered (start, end) span. `end` may precede `start` when the log is
/// out of shape; that is passed through untouched.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Interval {
    pub unit: UnitId,
    pub phase: Phase,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub program: Option<String>, // only ever set on Run
}

impl Interval {
    pub fn preheat(unit: UnitId, start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self {
            unit,
            phase: Phase::Preheat,
            start,
            end,
            program: None,
        }
    }

    pub fn run(
        unit: UnitId,
        start: NaiveDateTime,
        end: NaiveDateTime,
        program: Option<String>,
    ) -> Self {
        Self {
            unit,
            phase: Phase::Run,
            start,
            end,
            program,
        }
    }

    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }
}

/// Intervals recovered for one unit, each list in emission order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UnitPhases {
    pub preheats: Vec<Interval>,
    pub runs: Vec<Interval>,
}

impl UnitPhases {
    pub fn is_empty(&self) -> bool {
        self.preheats.is_empty() && self.runs.is_empty()
    }

    /// Preheats and runs merged by start time, preheat first on ties.
    pub fn all_sorted(&self) -> Vec<&Interval> {
        let mut all: Vec<&Interval> = self.preheats.iter().chain(self.runs.iter()).collect();
        all.sort_by_key(|i| (i.start, i.phase == Phase::Run));
        all
    }
}
