//! Reading oven log exports of unknown dialect.
//!
//! The controller software writes `;`-separated cp1252 files, re-saved copies
//! are often UTF-8 with a BOM or comma-separated. Decodings and delimiters are
//! tried in order and the first parse with enough columns wins.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::table::RawTable;
use csv::ReaderBuilder;
use encoding_rs::WINDOWS_1252;
use log::debug;
use std::fs;
use std::path::Path;

const UTF8_BOM: &str = "\u{feff}";

/// Candidate decodings of the raw bytes: UTF-8 (BOM stripped) if valid, then
/// Windows-1252, which maps every byte and therefore never fails.
pub fn decode_candidates(bytes: &[u8]) -> Vec<(&'static str, String)> {
    let mut out = Vec::with_capacity(2);
    if let Ok(s) = std::str::from_utf8(bytes) {
        out.push(("utf-8", s.strip_prefix(UTF8_BOM).unwrap_or(s).to_string()));
    }
    let (text, _) = WINDOWS_1252.decode_without_bom_handling(bytes);
    out.push((WINDOWS_1252.name(), text.into_owned()));
    out
}

/// Parse `text` with one delimiter. Returns `None` when the header row has
/// fewer than `min_columns` fields or the text is not CSV at all.
pub fn parse_with_delimiter(text: &str, delimiter: u8, min_columns: usize) -> Option<RawTable> {
    let mut rdr = ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .has_headers(true)
        .from_reader(text.as_bytes());

    let headers: Vec<String> = rdr
        .headers()
        .ok()?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    if headers.len() < min_columns {
        return None;
    }

    let mut table = RawTable::new(headers);
    for record in rdr.records() {
        let record = record.ok()?;
        table.push_row(record.iter().map(str::to_string).collect());
    }
    Some(table)
}

pub fn parse_table(bytes: &[u8], cfg: &Config) -> AppResult<RawTable> {
    let delimiters = cfg.delimiter_bytes();

    for (encoding, text) in decode_candidates(bytes) {
        for &delim in &delimiters {
            if let Some(table) = parse_with_delimiter(&text, delim, cfg.min_columns) {
                debug!(
                    "parsed as {encoding} with delimiter {:?}: {} columns, {} rows",
                    delim as char,
                    table.headers.len(),
                    table.len()
                );
                return Ok(table);
            }
        }
    }

    Err(AppError::UnreadableCsv(format!(
        "no delimiter of {:?} yields at least {} columns",
        cfg.delimiters, cfg.min_columns
    )))
}

pub fn read_table(path: &Path, cfg: &Config) -> AppResult<RawTable> {
    let bytes = fs::read(path)?;
    parse_table(&bytes, cfg).map_err(|e| match e {
        AppError::UnreadableCsv(msg) => {
            AppError::UnreadableCsv(format!("{}: {msg}", path.display()))
        }
        other => other,
    })
}
