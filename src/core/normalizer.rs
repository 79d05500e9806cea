//! Raw table → sorted, typed event series.

use crate::core::columns::{RoleKeywords, resolve_columns};
use crate::core::device::{parse_device, unit_for};
use crate::core::fields::{extract_program_number, parse_temperature};
use crate::core::timestamp::parse_timestamp;
use crate::errors::AppResult;
use crate::models::event::{Event, EventSeries};
use crate::models::event_kind::EventKinds;
use crate::models::table::RawTable;
use log::debug;

pub fn normalize(table: &RawTable) -> AppResult<EventSeries> {
    normalize_with(table, &RoleKeywords::default())
}

/// Resolve columns, then turn every row with a parseable timestamp into an
/// event. Rows whose timestamp cannot be read are dropped without error.
pub fn normalize_with(table: &RawTable, keywords: &RoleKeywords) -> AppResult<EventSeries> {
    let cols = resolve_columns(&table.headers, keywords)?;
    debug!(
        "columns: time='{}' device='{}' message='{}' target='{}' actual='{}'",
        table.headers[cols.time],
        table.headers[cols.device],
        table.headers[cols.message],
        table.headers[cols.target_temp],
        table.headers[cols.actual_temp],
    );

    let mut events = Vec::with_capacity(table.len());
    let mut dropped = 0usize;

    for row in 0..table.len() {
        let Some(timestamp) = parse_timestamp(table.cell(row, cols.time)) else {
            dropped += 1;
            continue;
        };

        let message = table.cell(row, cols.message);
        let device = parse_device(table.cell(row, cols.device));
        let unit = unit_for(device, message);

        let mut ev = Event::new(row, unit, timestamp, EventKinds::classify(message)).with_temps(
            parse_temperature(table.cell(row, cols.target_temp)),
            parse_temperature(table.cell(row, cols.actual_temp)),
        );
        ev.program = extract_program_number(message);
        ev.message = message.to_string();

        events.push(ev);
    }

    if dropped > 0 {
        debug!("dropped {dropped} row(s) with unparseable timestamp");
    }

    EventSeries::from_events(events)
}
