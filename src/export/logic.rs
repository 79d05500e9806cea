// src/export/logic.rs

use crate::config::Config;
use crate::core::logic::Analysis;
use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::dashboard::render_dashboard;
use crate::export::fs_utils::{OutputKind, ensure_writable};
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::IntervalExport;
use crate::export::notify_export_success;
use crate::ui::messages::{info, warning};
use log::debug;
use std::fs;
use std::path::Path;

/// High-level export entry points.
pub struct ExportLogic;

impl ExportLogic {
    /// Flat interval rows: units in display order, each unit's intervals by
    /// start time.
    pub fn rows(analysis: &Analysis) -> Vec<IntervalExport> {
        analysis
            .units_in_order()
            .into_iter()
            .flat_map(|(_, phases)| phases.all_sorted())
            .map(|iv| IntervalExport::from_interval(iv, &analysis.window))
            .collect()
    }

    /// Export the recovered intervals.
    ///
    /// - `format`: csv | json
    /// - `file`: output path (relative paths resolve against the cwd)
    pub fn export(
        analysis: &Analysis,
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);
        ensure_writable(path, OutputKind::Intervals, force)?;

        let rows = Self::rows(analysis);
        debug!("exporting {} interval(s) as {}", rows.len(), format.as_str());
        if rows.is_empty() {
            warning("No preheat or run intervals found, writing an empty export.");
        }

        match format {
            ExportFormat::Csv => export_csv(&rows, path)?,
            ExportFormat::Json => export_json(&rows, path)?,
        }

        Ok(())
    }

    /// Render and write the HTML dashboard.
    pub fn write_dashboard(
        analysis: &Analysis,
        cfg: &Config,
        file: &str,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);
        ensure_writable(path, OutputKind::Dashboard, force)?;

        info(format!("Rendering {} unit chart(s)", analysis.order.len()));
        let html = render_dashboard(analysis, cfg);
        fs::write(path, html)?;

        notify_export_success("Dashboard", path);
        Ok(())
    }
}
