//! Formatting utilities used for CLI and export outputs.

use chrono::NaiveDateTime;

/// Minutes as `HHh MMm`, negative durations keep their sign.
pub fn mins2readable(mins: i64) -> String {
    let sign = if mins < 0 { "-" } else { "" };
    let abs_m = mins.abs();
    format!("{}{:02}h {:02}m", sign, abs_m / 60, abs_m % 60)
}

/// `dd.mm. HH:MM:SS`, the way the oven controller shows times.
pub fn short_ts(ts: NaiveDateTime) -> String {
    ts.format("%d.%m. %H:%M:%S").to_string()
}

pub fn optional(value: Option<&str>) -> String {
    value.unwrap_or("--").to_string()
}
