use crate::core::calculator::cycle::{CycleWindow, compute_cycle_window};
use crate::core::calculator::phases::extract_phases;
use crate::core::normalizer::normalize;
use crate::core::ordering::order_units;
use crate::errors::{AppError, AppResult};
use crate::models::event::{Event, EventSeries};
use crate::models::interval::UnitPhases;
use crate::models::table::RawTable;
use crate::models::unit::UnitId;
use log::{info, warn};
use std::collections::BTreeMap;

/// Everything the renderers need from one log file.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub series: EventSeries,
    pub phases: BTreeMap<UnitId, UnitPhases>,
    pub window: CycleWindow,
    /// Unit labels in display order.
    pub order: Vec<String>,
}

impl Analysis {
    /// Units in display order, paired with their intervals.
    pub fn units_in_order(&self) -> Vec<(&UnitId, &UnitPhases)> {
        let by_label: BTreeMap<String, (&UnitId, &UnitPhases)> = self
            .phases
            .iter()
            .map(|(u, p)| (u.label(), (u, p)))
            .collect();

        self.order
            .iter()
            .filter_map(|l| by_label.get(l).copied())
            .collect()
    }

    pub fn find_unit(&self, label: &str) -> AppResult<(&UnitId, &UnitPhases)> {
        self.phases
            .iter()
            .find(|(u, _)| u.label() == label)
            .ok_or_else(|| AppError::UnknownUnit(label.to_string()))
    }

    /// Events of one unit, chronological.
    pub fn events_of<'a>(&'a self, unit: &'a UnitId) -> impl Iterator<Item = &'a Event> + 'a {
        self.series.events().iter().filter(move |e| &e.unit == unit)
    }
}

pub struct Core;

impl Core {
    pub fn analyze(table: &RawTable) -> AppResult<Analysis> {
        let series = normalize(table)?;
        Ok(Self::analyze_series(series))
    }

    pub fn analyze_series(series: EventSeries) -> Analysis {
        let phases = extract_phases(&series);
        let window = compute_cycle_window(&series);

        let labels: Vec<String> = phases.keys().map(UnitId::label).collect();
        let order = order_units(&labels);

        let (preheats, runs) = phases.values().fold((0, 0), |(p, r), ph| {
            (p + ph.preheats.len(), r + ph.runs.len())
        });
        info!(
            "{} events, {} units, {} preheat(s), {} run(s), cycle {}",
            series.len(),
            order.len(),
            preheats,
            runs,
            window.describe()
        );

        if series.max_timestamp() >= window.end {
            warn!(
                "log runs past the cycle end ({}), later events are folded into the window",
                window.end.format("%d.%m. %H:%M")
            );
        }

        Analysis {
            series,
            phases,
            window,
            order,
        }
    }
}
