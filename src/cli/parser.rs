use crate::export::ExportFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line interface definition for ovenlog
#[derive(Parser)]
#[command(
    name = "ovenlog",
    version = env!("CARGO_PKG_VERSION"),
    about = "Turn oven status logs into preheat/run timelines on a 22:00-22:00 cycle",
    long_about = None
)]
pub struct Cli {
    /// Override the configuration file path
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the default configuration file
    Init {
        #[arg(long, short = 'f', help = "Overwrite an existing configuration file")]
        force: bool,
    },

    /// Show or check the configuration
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Report keys missing from the configuration file")]
        check: bool,
    },

    /// List the units found in a log, in display order
    Units {
        /// Oven log export (CSV)
        file: PathBuf,
    },

    /// Show recovered preheat and run intervals per unit
    Phases {
        /// Oven log export (CSV)
        file: PathBuf,

        #[arg(long = "unit", value_name = "LABEL", help = "Only show this unit")]
        unit: Option<String>,

        #[arg(long = "cycle", help = "Show times projected onto the 22:00-22:00 cycle")]
        cycle: bool,
    },

    /// Render the HTML dashboard
    Report {
        /// Oven log export (CSV)
        file: PathBuf,

        #[arg(long = "out", short = 'o', value_name = "FILE", help = "Output HTML file")]
        out: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Export recovered intervals
    Export {
        /// Oven log export (CSV)
        file: PathBuf,

        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long = "out", short = 'o', value_name = "FILE")]
        out: String,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
