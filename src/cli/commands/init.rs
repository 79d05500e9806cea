use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};

/// Handle the `init` command: write the default configuration file.
pub fn handle(cli: &Cli) -> AppResult<()> {
    if let Commands::Init { force } = &cli.command {
        let path = Config::resolve_path(cli.config.as_deref());

        if path.exists() && !*force {
            warning(format!(
                "Configuration file already exists: {} (use --force to overwrite)",
                path.display()
            ));
            return Ok(());
        }

        Config::init_at(&path)?;
        success(format!("Config file: {}", path.display()));
    }
    Ok(())
}
