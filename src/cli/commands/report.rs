use crate::cli::commands::load_analysis;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::ui::messages::info;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Report { file, out, force } = cmd {
        let analysis = load_analysis(file, cfg)?;
        info(format!("Analysed 24h window: {}", analysis.window.describe()));

        let out = out.as_deref().unwrap_or(&cfg.output_file);
        ExportLogic::write_dashboard(&analysis, cfg, out, *force)?;
    }
    Ok(())
}
