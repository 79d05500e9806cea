use crate::cli::commands::load_analysis;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::header;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Units { file } = cmd {
        let analysis = load_analysis(file, cfg)?;

        header(format!("Units ({})", analysis.order.len()));
        for (i, label) in analysis.order.iter().enumerate() {
            println!("{:>3}. {}", i + 1, label);
        }
    }
    Ok(())
}
