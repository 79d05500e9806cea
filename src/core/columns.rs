//! Column role resolution: locate the time/device/message/temperature columns
//! by fuzzy, case-insensitive substring match on the header names.

use crate::errors::{AppError, AppResult};
use crate::models::column::{ColumnMap, ColumnRole};

/// Header fragments searched for each role.
#[derive(Debug, Clone)]
pub struct RoleKeywords {
    entries: Vec<(ColumnRole, Vec<String>)>,
}

impl Default for RoleKeywords {
    fn default() -> Self {
        Self {
            entries: ColumnRole::ALL
                .iter()
                .map(|r| {
                    let keys = r.default_keywords().iter().map(|k| k.to_string()).collect();
                    (*r, keys)
                })
                .collect(),
        }
    }
}

impl RoleKeywords {
    /// Replace the fragments for a single role.
    pub fn with(mut self, role: ColumnRole, keys: &[&str]) -> Self {
        let keys: Vec<String> = keys.iter().map(|k| k.to_string()).collect();
        match self.entries.iter_mut().find(|(r, _)| *r == role) {
            Some(entry) => entry.1 = keys,
            None => self.entries.push((role, keys)),
        }
        self
    }

    pub fn keywords(&self, role: ColumnRole) -> &[String] {
        self.entries
            .iter()
            .find(|(r, _)| *r == role)
            .map(|(_, k)| k.as_slice())
            .unwrap_or(&[])
    }
}

/// First header (in header order) containing any of `keys`, ignoring case.
pub fn find_column(headers: &[String], keys: &[String]) -> Option<usize> {
    let keys: Vec<String> = keys.iter().map(|k| k.to_lowercase()).collect();
    headers.iter().position(|h| {
        let h = h.to_lowercase();
        keys.iter().any(|k| h.contains(k.as_str()))
    })
}

/// Map every role to a column index; all unresolved roles are reported at once.
pub fn resolve_columns(headers: &[String], keywords: &RoleKeywords) -> AppResult<ColumnMap> {
    let mut found = [None; 5];
    let mut missing = Vec::new();

    for (slot, role) in ColumnRole::ALL.iter().enumerate() {
        match find_column(headers, keywords.keywords(*role)) {
            Some(idx) => found[slot] = Some(idx),
            None => missing.push(*role),
        }
    }

    match found {
        [Some(time), Some(device), Some(message), Some(target_temp), Some(actual_temp)] => {
            Ok(ColumnMap {
                time,
                device,
                message,
                target_temp,
                actual_temp,
            })
        }
        _ => Err(AppError::SchemaResolution { missing }),
    }
}
