use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::config::check::missing_keys;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

/// Handle the `config` subcommand
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
    } = &cli.command
    {
        let path = Config::resolve_path(cli.config.as_deref());

        // ---- PRINT CONFIG ----
        if *print_config {
            info(format!("Current configuration ({}):\n", path.display()));
            println!("{}", serde_yaml::to_string(cfg)?);
        }

        // ---- CHECK CONFIG ----
        if *check {
            if !path.exists() {
                warning(format!(
                    "No configuration file at {}, defaults are used",
                    path.display()
                ));
                return Ok(());
            }

            let missing = missing_keys(&path)?;
            if missing.is_empty() {
                success("Configuration file is complete");
            } else {
                warning(format!(
                    "Missing keys (defaults used): {}",
                    missing.join(", ")
                ));
            }
        }

        if !*print_config && !*check {
            info("Nothing to do: use --print or --check");
        }
    }

    Ok(())
}
