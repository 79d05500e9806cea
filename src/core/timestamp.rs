//! Timestamp parsing for oven log rows.
//!
//! Two shapes occur in practice:
//! - the controller export `"25/10/24, 22:15:03, 250"` (yy/mm/dd, time,
//!   sub-second fraction as a separate comma field);
//! - hand-edited or re-saved files with a day-first local date/time.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Two-digit-year formats come first: `%Y` would happily read "24" as year 24.
const DAY_FIRST_DATETIME: &[&str] = &[
    "%d.%m.%y %H:%M:%S%.f",
    "%d.%m.%y %H:%M",
    "%d/%m/%y %H:%M:%S%.f",
    "%d/%m/%y %H:%M",
    "%d.%m.%Y %H:%M:%S%.f",
    "%d.%m.%Y %H:%M",
    "%d/%m/%Y %H:%M:%S%.f",
    "%d/%m/%Y %H:%M",
    "%d-%m-%Y %H:%M:%S%.f",
    "%d-%m-%Y %H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

const DAY_FIRST_DATE: &[&str] = &[
    "%d.%m.%y", "%d/%m/%y", "%d.%m.%Y", "%d/%m/%Y", "%d-%m-%Y", "%Y-%m-%d",
];

/// Parse `"<yy/mm/dd>, <HH:MM:SS>, <fraction>"`.
pub fn parse_controller_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let parts: Vec<&str> = raw.split(',').map(str::trim).collect();
    if parts.len() < 3 {
        return None;
    }

    let (date, time, frac) = (parts[0], parts[1], parts[2]);
    if !frac.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    let joined = if frac.is_empty() {
        format!("{date} {time}")
    } else {
        format!("{date} {time}.{frac}")
    };

    NaiveDateTime::parse_from_str(&joined, "%y/%m/%d %H:%M:%S%.f").ok()
}

/// Generic day-first parse; a bare date means midnight.
pub fn parse_day_first(raw: &str) -> Option<NaiveDateTime> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }

    DAY_FIRST_DATETIME
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .or_else(|| {
            DAY_FIRST_DATE
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
                .map(|d| d.and_time(NaiveTime::MIN))
        })
}

/// Controller format first, day-first fallback second.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    parse_controller_timestamp(raw).or_else(|| parse_day_first(raw))
}
