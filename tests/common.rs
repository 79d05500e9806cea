#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{NaiveDate, NaiveDateTime};
use ovenlog::models::event::{Event, EventSeries};
use ovenlog::models::event_kind::EventKind;
use ovenlog::models::table::RawTable;
use ovenlog::models::unit::{Device, UnitId};
use std::fs;
use std::path::{Path, PathBuf};

pub fn ovl() -> Command {
    cargo_bin_cmd!("ovenlog")
}

pub const HEADER: &str = "Datum/Zeit;Gerät;Meldung;Soll °C;Ist °C";

/// One night of two ovens: a chamber oven with load/start/end and a roll-in
/// oven with a numbered program, plus a garbage line and a nameless gateway.
pub const NIGHT_SHIFT: &str = "\
Datum/Zeit;Gerät;Meldung;Soll °C;Ist °C
25/10/24, 22:10:00, 000;MIWE ideal TC (1/1);Herd 1: Arbeitsprogramm P12 geladen;220,5;180,0
25/10/24, 23:00:00, 000;MIWE roll-in (3);Programm gestartet Programm 7;200;150
25/10/24, 22:40:00, 000;MIWE ideal TC (1/1);Herd 1: Programm gestartet;220,5;219,0
garbage;MIWE roll-in (3);Programm gestartet;;
25/10/25, 00:30:00, 000;MIWE roll-in (3);Programm beendet;200;198,5
25/10/25, 01:10:00, 000;MIWE ideal TC (1/1);Herd 1: Programmende;220,5;221,0
25/10/25, 02:00:00, 000;(2/1);Verbindung hergestellt;;
";

/// Write `content` into a fresh temp dir and return (dir guard, file path).
pub fn write_log(name: &str, content: &str) -> (tempfile::TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join(name);
    fs::write(&path, content).expect("write fixture");
    (dir, path)
}

pub fn write_bytes(name: &str, content: &[u8]) -> (tempfile::TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join(name);
    fs::write(&path, content).expect("write fixture");
    (dir, path)
}

/// Config path inside `dir` that does not exist, so defaults apply.
pub fn no_config(dir: &Path) -> String {
    dir.join("missing.conf").to_string_lossy().to_string()
}

pub fn table(rows: &[[&str; 5]]) -> RawTable {
    let mut t = RawTable::new(HEADER.split(';').map(str::to_string).collect());
    for r in rows {
        t.push_row(r.iter().map(|c| c.to_string()).collect());
    }
    t
}

pub fn dt(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M"))
        .expect("valid test timestamp")
}

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid test date")
}

pub fn oven(id: &str) -> UnitId {
    UnitId::device(Device::new("Ofen", id))
}

/// Event on 2025-10-25 at `hm` ("HH:MM"); row numbers follow call order.
pub fn ev(row: usize, unit: &UnitId, hm: &str, kind: EventKind) -> Event {
    Event::new(row, unit.clone(), dt(&format!("2025-10-25 {hm}")), kind)
}

pub fn series(events: Vec<Event>) -> EventSeries {
    EventSeries::from_events(events).expect("non-empty series")
}
