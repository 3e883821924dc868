//! Configuration management for the Markdown validator.
//!
//! Handles:
//! - Command-line argument parsing
//! - Probe enablement and timeout

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;

/// Command-line arguments for the Markdown validator
#[derive(Debug, Parser)]
#[command(name = "mdcheck")]
#[command(about = "Structural validator for Markdown files")]
#[command(version)]
pub struct Args {
    /// Markdown file to validate
    pub file: PathBuf,

    /// Emit the full report as JSON instead of a table
    #[arg(long)]
    pub json: bool,

    /// Skip the network reachability check for external URLs
    #[arg(long)]
    pub offline: bool,

    /// Timeout in seconds for each external link probe
    #[arg(long, default_value_t = 5)]
    pub timeout: u64,

    /// Log level for the validator
    #[arg(
        long,
        default_value = "info",
        help = "Log level (trace, debug, info, warn, error)"
    )]
    pub log_level: String,
}

/// Combined configuration from all sources
#[derive(Debug, Clone)]
pub struct Config {
    pub file: PathBuf,
    pub json: bool,
    pub offline: bool,
    pub probe_timeout: Duration,
    pub log_level: String,
}

impl Config {
    /// Create configuration from command-line arguments
    pub fn from_args_and_env() -> Result<Self> {
        Self::from_args(Args::parse())
    }

    /// Create configuration from explicit arguments (useful for testing)
    pub fn from_args(args: Args) -> Result<Self> {
        Ok(Config {
            file: args.file,
            json: args.json,
            offline: args.offline,
            probe_timeout: Duration::from_secs(args.timeout),
            log_level: args.log_level,
        })
    }
}
