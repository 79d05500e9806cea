use serde::Serialize;
use std::fmt;

/// Device class substituted when a routing device logs its slot id but no name.
pub const GATEWAY_LABEL: &str = "MIWE gateway";

/// Device types containing this fragment (lowercase) get one unit per chamber.
pub const CHAMBER_DEVICE_MARKER: &str = "miwe ideal tc";

/// Placeholder values the export writes for a missing device name.
pub const MISSING_PLACEHOLDERS: &[&str] = &["", "0", "nan"];

/// Parsed "<type> (<id>)" device field.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Device {
    pub device_type: String,
    pub device_id: String,
}

impl Device {
    pub fn new(device_type: impl Into<String>, device_id: impl Into<String>) -> Self {
        Self {
            device_type: device_type.into(),
            device_id: device_id.into(),
        }
    }

    pub fn has_chambers(&self) -> bool {
        self.device_type
            .to_lowercase()
            .contains(CHAMBER_DEVICE_MARKER)
    }
}

/// One physical timeline: a device, or one chamber ("Herd") of a
/// multi-chamber oven.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct UnitId {
    pub device: Device,
    pub chamber: Option<String>,
}

impl UnitId {
    pub fn device(device: Device) -> Self {
        Self {
            device,
            chamber: None,
        }
    }

    pub fn chamber(device: Device, chamber: impl Into<String>) -> Self {
        Self {
            device,
            chamber: Some(chamber.into()),
        }
    }

    /// Display label, e.g. `MIWE ideal TC (1/1) - Herd 2`.
    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for UnitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.device.device_type, self.device.device_id)?;
        if let Some(ch) = &self.chamber {
            write!(f, " - Herd {}", ch)?;
        }
        Ok(())
    }
}
