//! ovenlog library root.
//! Exposes the CLI parser, the high-level run() function, the analysis core
//! (normalizer, phase extractor, cycle window, unit ordering) and the
//! boundary modules that read logs and write reports.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod ingest;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

pub use core::calculator::cycle::{CycleWindow, compute_cycle_window, remap_to_cycle};
pub use core::calculator::phases::extract_phases;
pub use core::normalizer::normalize;
pub use core::ordering::order_units;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init { .. } => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(cli, cfg),
        Commands::Units { .. } => cli::commands::units::handle(&cli.command, cfg),
        Commands::Phases { .. } => cli::commands::phases::handle(&cli.command, cfg),
        Commands::Report { .. } => cli::commands::report::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // `init` must work even when the existing file is broken
    let cfg = match &cli.command {
        Commands::Init { .. } => Config::default(),
        _ => Config::load_from(&Config::resolve_path(cli.config.as_deref()))?,
    };

    dispatch(&cli, &cfg)
}
