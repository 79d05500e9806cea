use serde::Serialize;
use std::fmt;

/// Semantic role a CSV column plays in an oven log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum ColumnRole {
    Time,
    Device,
    Message,
    TargetTemp,
    ActualTemp,
}

impl ColumnRole {
    pub const ALL: [ColumnRole; 5] = [
        ColumnRole::Time,
        ColumnRole::Device,
        ColumnRole::Message,
        ColumnRole::TargetTemp,
        ColumnRole::ActualTemp,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnRole::Time => "time",
            ColumnRole::Device => "device",
            ColumnRole::Message => "message",
            ColumnRole::TargetTemp => "target temperature",
            ColumnRole::ActualTemp => "actual temperature",
        }
    }

    /// Header fragments the oven export uses for this role (German headers,
    /// including the mangled cp437 spelling of "Gerät").
    pub fn default_keywords(&self) -> &'static [&'static str] {
        match self {
            ColumnRole::Time => &["Datum", "Zeit"],
            ColumnRole::Device => &["Ger", "Gerät", "Ger„t"],
            ColumnRole::Message => &["Meld"],
            ColumnRole::TargetTemp => &["Soll"],
            ColumnRole::ActualTemp => &["Ist"],
        }
    }
}

impl fmt::Display for ColumnRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Column index for every role, as resolved from the header row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMap {
    pub time: usize,
    pub device: usize,
    pub message: usize,
    pub target_temp: usize,
    pub actual_temp: usize,
}

impl ColumnMap {
    pub fn index_of(&self, role: ColumnRole) -> usize {
        match role {
            ColumnRole::Time => self.time,
            ColumnRole::Device => self.device,
            ColumnRole::Message => self.message,
            ColumnRole::TargetTemp => self.target_temp,
            ColumnRole::ActualTemp => self.actual_temp,
        }
    }
}
