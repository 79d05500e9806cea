use super::{event_kind::EventKinds, unit::UnitId};
use crate::errors::{AppError, AppResult};
use chrono::NaiveDateTime;

#[derive(Debug, Clone)]
pub struct Event {
    pub row: usize,                // data row index in the source file
    pub unit: UnitId,              // grouping key
    pub timestamp: NaiveDateTime,  // wall-clock time as logged
    pub kinds: EventKinds,         // markers in the message
    pub program: Option<String>,   // "P<digits>"
    pub target_temp: Option<f64>,  // Soll °C
    pub actual_temp: Option<f64>,  // Ist °C
    pub message: String,
}

impl Event {
    /// Minimal constructor, used by callers that build events by hand.
    pub fn new(
        row: usize,
        unit: UnitId,
        timestamp: NaiveDateTime,
        kinds: impl Into<EventKinds>,
    ) -> Self {
        Self {
            row,
            unit,
            timestamp,
            kinds: kinds.into(),
            program: None,
            target_temp: None,
            actual_temp: None,
            message: String::new(),
        }
    }

    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = Some(program.into());
        self
    }

    pub fn with_temps(mut self, target: Option<f64>, actual: Option<f64>) -> Self {
        self.target_temp = target;
        self.actual_temp = actual;
        self
    }
}

/// Chronologically sorted, non-empty event sequence for one dataset.
#[derive(Debug, Clone)]
pub struct EventSeries {
    events: Vec<Event>,
}

impl EventSeries {
    /// Sort by timestamp (ties keep source row order) and reject empty input.
    pub fn from_events(mut events: Vec<Event>) -> AppResult<Self> {
        if events.is_empty() {
            return Err(AppError::EmptyDataset);
        }
        events.sort_by_key(|e| (e.timestamp, e.row));
        Ok(Self { events })
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Earliest timestamp; the series is sorted and never empty.
    pub fn min_timestamp(&self) -> NaiveDateTime {
        self.events[0].timestamp
    }

    pub fn max_timestamp(&self) -> NaiveDateTime {
        self.events[self.events.len() - 1].timestamp
    }
}
