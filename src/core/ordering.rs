//! Display order for unit labels.
//!
//! Labels are parsed back into (type, id numbers, chamber) and compared field
//! by field, so "Ofen (10)" follows "Ofen (9)" and "Herd 10" follows "Herd 2".
//! Labels without a usable type or id go last.

use crate::core::device::is_missing_name;
use regex::Regex;
use std::cmp::Ordering;
use std::sync::LazyLock;

static BASE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.*?)\s*\(([^)]+)\)\s*$").expect("valid label regex"));

static DIGITS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+").expect("valid digit regex"));

static CHAMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Herd\s*(\d+)").expect("valid chamber regex"));

/// Placeholder number for ids without digits; sorts after every real id.
pub const NO_NUMBER: u64 = u64::MAX;

/// Variant order matters: every `Valid` key sorts before `Invalid`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum UnitSortKey {
    Valid {
        device_type: String,
        id_numbers: Vec<u64>,
        chamber: u64,
    },
    Invalid,
}

pub fn unit_sort_key(label: &str) -> UnitSortKey {
    let (base, chamber_part) = label.split_once(" - ").unwrap_or((label, ""));

    let (device_type, device_id) = match BASE_RE.captures(base) {
        Some(c) => (
            c.get(1).map_or("", |m| m.as_str()).trim().to_lowercase(),
            c.get(2).map_or("", |m| m.as_str()).trim().to_string(),
        ),
        None => (base.trim().to_lowercase(), String::new()),
    };

    if is_missing_name(&device_type) || device_id.is_empty() {
        return UnitSortKey::Invalid;
    }

    let mut id_numbers: Vec<u64> = DIGITS_RE
        .find_iter(&device_id)
        .map(|m| m.as_str().parse::<u64>().unwrap_or(NO_NUMBER))
        .collect();
    if id_numbers.is_empty() {
        id_numbers.push(NO_NUMBER);
    }

    let chamber = CHAMBER_RE
        .captures(chamber_part)
        .and_then(|c| c.get(1))
        .map_or(0, |m| m.as_str().parse::<u64>().unwrap_or(NO_NUMBER));

    UnitSortKey::Valid {
        device_type,
        id_numbers,
        chamber,
    }
}

/// Key order first, raw label text second.
pub fn compare_labels(a: &str, b: &str) -> Ordering {
    unit_sort_key(a)
        .cmp(&unit_sort_key(b))
        .then_with(|| a.cmp(b))
}

/// Labels sorted with [`compare_labels`].
pub fn order_units<S: AsRef<str>>(labels: &[S]) -> Vec<String> {
    let mut out: Vec<String> = labels.iter().map(|l| l.as_ref().to_string()).collect();
    out.sort_by(|a, b| compare_labels(a, b));
    out
}
