use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Aeolus multi-station weather analytics.
#[derive(Parser)]
#[command(
    name = "aeolus",
    version,
    about = "Multi-station weather observation analytics"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Fetch current observations for the configured stations.
    Fetch(FetchArgs),
    /// Analyze a stored observation sequence.
    Analyze(AnalyzeArgs),
    /// Fetch current observations and analyze them in one run.
    Report(ReportArgs),
}

/// Arguments for the `fetch` subcommand.
#[derive(clap::Args)]
pub struct FetchArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "aeolus.toml")]
    pub config: PathBuf,

    /// Write the fetched observations as JSON to this path.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `analyze` subcommand.
#[derive(clap::Args)]
pub struct AnalyzeArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "aeolus.toml")]
    pub config: PathBuf,

    /// Path to an observations JSON file.
    #[arg(short, long)]
    pub input: PathBuf,

    /// Write the report as JSON to this path.
    #[arg(long)]
    pub json: Option<PathBuf>,
}

/// Arguments for the `report` subcommand.
#[derive(clap::Args)]
pub struct ReportArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "aeolus.toml")]
    pub config: PathBuf,

    /// Write the report as JSON to this path.
    #[arg(long)]
    pub json: Option<PathBuf>,
}
