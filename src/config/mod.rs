use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub mod check;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default = "default_output_file")]
    pub output_file: String,
    #[serde(default = "default_delimiters")]
    pub delimiters: Vec<String>,
    #[serde(default = "default_min_columns")]
    pub min_columns: usize,
    #[serde(default = "default_chart_height")]
    pub chart_height: u32,
    #[serde(default = "default_y_axis_min")]
    pub y_axis_min: f64,
    #[serde(default = "default_y_axis_max")]
    pub y_axis_max: f64,
    #[serde(default = "default_y_axis_tick")]
    pub y_axis_tick: f64,
    #[serde(default = "default_x_tick_hours")]
    pub x_tick_hours: u32,
    #[serde(default = "default_plotly_cdn")]
    pub plotly_cdn: String,
}

fn default_output_file() -> String {
    "ofen_dashboard.html".to_string()
}
fn default_delimiters() -> Vec<String> {
    vec![";".to_string(), ",".to_string(), "\t".to_string()]
}
fn default_min_columns() -> usize {
    5
}
fn default_chart_height() -> u32 {
    350
}
fn default_y_axis_min() -> f64 {
    0.0
}
fn default_y_axis_max() -> f64 {
    350.0
}
fn default_y_axis_tick() -> f64 {
    50.0
}
fn default_x_tick_hours() -> u32 {
    2
}
fn default_plotly_cdn() -> String {
    "https://cdn.plot.ly/plotly-2.35.2.min.js".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_file: default_output_file(),
            delimiters: default_delimiters(),
            min_columns: default_min_columns(),
            chart_height: default_chart_height(),
            y_axis_min: default_y_axis_min(),
            y_axis_max: default_y_axis_max(),
            y_axis_tick: default_y_axis_tick(),
            x_tick_hours: default_x_tick_hours(),
            plotly_cdn: default_plotly_cdn(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory (`~/.ovenlog`)
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".ovenlog")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("ovenlog.conf")
    }

    /// Config path: explicit override or the standard location.
    pub fn resolve_path(custom: Option<&str>) -> PathBuf {
        custom
            .map(PathBuf::from)
            .unwrap_or_else(Self::config_file)
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let cfg: Config = serde_yaml::from_str(&content)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.delimiters.is_empty() {
            return Err(AppError::Config("'delimiters' must not be empty".into()));
        }
        if let Some(d) = self.delimiters.iter().find(|d| d.len() != 1) {
            return Err(AppError::Config(format!(
                "delimiter {d:?} must be a single ASCII character"
            )));
        }
        if self.y_axis_max <= self.y_axis_min {
            return Err(AppError::Config(
                "'y_axis_max' must be greater than 'y_axis_min'".into(),
            ));
        }
        if self.x_tick_hours == 0 {
            return Err(AppError::Config("'x_tick_hours' must be at least 1".into()));
        }
        Ok(())
    }

    /// Delimiters as bytes for the CSV reader.
    pub fn delimiter_bytes(&self) -> Vec<u8> {
        self.delimiters
            .iter()
            .filter_map(|d| d.as_bytes().first().copied())
            .collect()
    }

    /// Write the default configuration file, creating the directory.
    pub fn init_at(path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }
        let yaml = serde_yaml::to_string(&Config::default())?;
        fs::write(path, yaml)?;
        Ok(())
    }
}
