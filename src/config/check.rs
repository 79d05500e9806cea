use crate::errors::AppResult;
use serde_yaml::Value;
use std::fs;
use std::path::Path;

/// Keys every complete configuration file carries.
pub const EXPECTED_KEYS: &[&str] = &[
    "output_file",
    "delimiters",
    "min_columns",
    "chart_height",
    "y_axis_min",
    "y_axis_max",
    "y_axis_tick",
    "x_tick_hours",
    "plotly_cdn",
];

/// Keys absent from the YAML file at `path` (they fall back to defaults).
/// A missing file reports every key.
pub fn missing_keys(path: &Path) -> AppResult<Vec<&'static str>> {
    if !path.exists() {
        return Ok(EXPECTED_KEYS.to_vec());
    }

    let content = fs::read_to_string(path)?;
    let yaml: Value = serde_yaml::from_str(&content)?;

    let missing = match yaml.as_mapping() {
        Some(map) => EXPECTED_KEYS
            .iter()
            .filter(|k| !map.contains_key(**k))
            .copied()
            .collect(),
        None => EXPECTED_KEYS.to_vec(),
    };

    Ok(missing)
}
