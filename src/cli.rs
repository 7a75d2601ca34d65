//! CLI argument parsing module for depscan

use clap::Parser;
use std::path::PathBuf;

/// Multi-ecosystem dependency scanner
#[derive(Parser, Debug, Clone)]
#[command(
    name = "depscan",
    version,
    about = "Scan a project for dependencies and upgrade candidates"
)]
pub struct CliArgs {
    /// Target directory (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    // General options
    /// Skip registry lookups; report parsed dependencies only
    #[arg(long)]
    pub offline: bool,

    /// Maximum concurrent registry lookups
    #[arg(long, default_value_t = 8)]
    pub concurrency: usize,

    /// Timeout in seconds for registry HTTP requests
    #[arg(long, default_value_t = 30)]
    pub timeout: u64,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,

    /// Enable quiet mode - minimal output
    #[arg(short, long)]
    pub quiet: bool,

    // Output options
    /// Output the report in JSON format
    #[arg(long)]
    pub json: bool,
}
