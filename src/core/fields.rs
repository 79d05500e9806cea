//! Per-row field extraction: program numbers and temperature readings.

use regex::Regex;
use std::sync::LazyLock;

static PROGRAM_SHORT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)P\s*(\d+)").expect("valid program regex"));

static PROGRAM_LONG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(?:Programm|Prog)\s+(\d+)").expect("valid program regex"));

/// Program label as `P<digits>`.
///
/// `P<digits>` is tried before `Programm/Prog <digits>`; the first pattern
/// that matches decides.
pub fn extract_program_number(message: &str) -> Option<String> {
    [&*PROGRAM_SHORT_RE, &*PROGRAM_LONG_RE]
        .iter()
        .find_map(|re| re.captures(message))
        .and_then(|c| c.get(1))
        .map(|m| format!("P{}", m.as_str()))
}

/// Temperature cell, tolerating a decimal comma. Anything else is missing.
pub fn parse_temperature(raw: &str) -> Option<f64> {
    let s = raw.trim().replace(',', ".");
    if s.is_empty() {
        return None;
    }
    s.parse::<f64>().ok().filter(|v| v.is_finite())
}
