use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "promptcheck",
    version,
    about = "Score a deep-research prompt for required sections and quality signals"
)]
pub struct Cli {
    /// Prompt file to check, or `-` to read from standard input
    pub input: String,

    #[arg(short, long, value_enum, default_value = "text")]
    pub format: ReportFormat,

    /// Rule overrides file (defaults to ./promptcheck.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress the report; only the exit status is produced
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ReportFormat {
    Text,
    Json,
    Md,
    Sarif,
}
