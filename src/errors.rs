//! Unified application error type.
//! The core (normalizer, extractor, cycle) and the boundary modules (ingest,
//! export, config, cli) all return AppError so failures surface the same way.

use crate::models::column::ColumnRole;
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Cannot read CSV file: {0}")]
    UnreadableCsv(String),

    // ---------------------------
    // Normalization errors
    // ---------------------------
    #[error("Required column(s) not found: {}", join_roles(missing))]
    SchemaResolution { missing: Vec<ColumnRole> },

    #[error("No valid rows left after timestamp parsing, check the time format")]
    EmptyDataset,

    #[error("Unknown unit: {0}")]
    UnknownUnit(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Export error: {0}")]
    Export(String),
}

fn join_roles(roles: &[ColumnRole]) -> String {
    roles
        .iter()
        .map(|r| r.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

pub type AppResult<T> = Result<T, AppError>;
