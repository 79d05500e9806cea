pub mod config;
pub mod export;
pub mod init;
pub mod phases;
pub mod report;
pub mod units;

use crate::config::Config;
use crate::core::logic::{Analysis, Core};
use crate::errors::AppResult;
use crate::ingest::csv_reader::read_table;
use std::path::Path;

/// Read and analyse one log file; shared by every data command.
pub(crate) fn load_analysis(file: &Path, cfg: &Config) -> AppResult<Analysis> {
    let table = read_table(file, cfg)?;
    Core::analyze(&table)
}
