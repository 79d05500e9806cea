//! Device field and chamber parsing.

use crate::models::unit::{Device, GATEWAY_LABEL, MISSING_PLACEHOLDERS, UnitId};
use regex::Regex;
use std::sync::LazyLock;

static DEVICE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.*?)\s*\((.*?)\)\s*$").expect("valid device regex"));

static CHAMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Herd\s*([0-9]+)").expect("valid chamber regex"));

pub(crate) fn is_missing_name(s: &str) -> bool {
    MISSING_PLACEHOLDERS.contains(&s.trim())
}

/// Split `"<type> (<id>)"`. Without a trailing parenthesis the whole field is
/// the type and the id is empty.
///
/// A nameless device with a slot-style id (`"(2/1)"`) is a gateway that lost
/// its name upstream and is relabelled as such.
pub fn parse_device(field: &str) -> Device {
    let (device_type, device_id) = match DEVICE_RE.captures(field) {
        Some(caps) => (
            caps.get(1).map_or("", |m| m.as_str()).trim().to_string(),
            caps.get(2).map_or("", |m| m.as_str()).trim().to_string(),
        ),
        None => (field.trim().to_string(), String::new()),
    };

    if is_missing_name(&device_type) && !device_id.is_empty() && device_id.contains('/') {
        return Device::new(GATEWAY_LABEL, device_id);
    }

    Device::new(device_type, device_id)
}

/// Chamber number from a message such as `"Herd 2: Programm gestartet"`.
pub fn extract_chamber(message: &str) -> Option<String> {
    CHAMBER_RE
        .captures(message)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

/// Unit a row belongs to: per chamber for multi-chamber ovens that name one,
/// per device otherwise.
pub fn unit_for(device: Device, message: &str) -> UnitId {
    if device.has_chambers()
        && let Some(chamber) = extract_chamber(message)
    {
        return UnitId::chamber(device, chamber);
    }
    UnitId::device(device)
}
