use crate::models::event::{Event, EventSeries};
use crate::models::interval::{Interval, UnitPhases};
use crate::models::unit::UnitId;
use chrono::NaiveDateTime;
use std::collections::BTreeMap;

/// Open state of one unit while walking its events left to right.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct UnitState {
    pub pending_load: Option<NaiveDateTime>,
    pub pending_start: Option<NaiveDateTime>,
    pub pending_program: Option<String>,
}

impl UnitState {
    /// Feed one event; closed intervals are appended to `out`.
    ///
    /// Markers are applied load, start, end, so a row that is both a load and
    /// a start yields a zero-length preheat.
    pub fn apply(&mut self, ev: &Event, out: &mut UnitPhases) {
        let t = ev.timestamp;

        // Last program number seen before the run closes wins
        if let Some(p) = &ev.program {
            self.pending_program = Some(p.clone());
        }

        if ev.kinds.loaded {
            // Reloading before a start replaces the earlier load
            self.pending_load = Some(t);
        }

        if ev.kinds.started {
            if let Some(load) = self.pending_load.take() {
                out.preheats.push(Interval::preheat(ev.unit.clone(), load, t));
            }
            // An unclosed earlier start is abandoned, no run is emitted for it
            self.pending_start = Some(t);
        }

        if ev.kinds.ended
            && let Some(start) = self.pending_start.take()
        {
            out.runs.push(Interval::run(
                ev.unit.clone(),
                start,
                t,
                self.pending_program.take(),
            ));
        }
    }
}

/// Fold one unit's chronologically ordered events into its intervals.
pub fn extract_unit<'a, I>(events: I) -> UnitPhases
where
    I: IntoIterator<Item = &'a Event>,
{
    let mut state = UnitState::default();
    let mut phases = UnitPhases::default();
    for ev in events {
        state.apply(ev, &mut phases);
    }
    phases
}

/// Split the sorted series into per-unit sequences, order preserved.
pub fn partition_by_unit(series: &EventSeries) -> BTreeMap<UnitId, Vec<&Event>> {
    let mut out: BTreeMap<UnitId, Vec<&Event>> = BTreeMap::new();
    for ev in series.events() {
        out.entry(ev.unit.clone()).or_default().push(ev);
    }
    out
}

/// Preheat and run intervals for every unit in the series. Units without any
/// closed interval are still present with empty lists.
pub fn extract_phases(series: &EventSeries) -> BTreeMap<UnitId, UnitPhases> {
    partition_by_unit(series)
        .into_iter()
        .map(|(unit, events)| (unit, extract_unit(events)))
        .collect()
}
