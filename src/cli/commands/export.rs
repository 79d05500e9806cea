use crate::cli::commands::load_analysis;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        file,
        format,
        out,
        force,
    } = cmd
    {
        let analysis = load_analysis(file, cfg)?;
        ExportLogic::export(&analysis, *format, out, *force)?;
    }
    Ok(())
}
