mod commands;
mod common;
mod enums;

pub use commands::*;
pub use common::*;
pub use enums::*;

use clap::Parser;

#[derive(Parser)]
#[command(name = "jobboard")]
#[command(about = "Browse, filter and sort open job postings", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Config file (default: $JOBBOARD_CONFIG or the user config dir)")]
    pub config: Option<String>,

    #[arg(long, global = true, help = "Posting JSON file, overrides source.path")]
    pub source: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Commands,
}
