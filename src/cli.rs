//! CLI argument parsing module for depview

use crate::manifest::manifest_path;
use crate::registry::NPM_REGISTRY_URL;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;
use tracing::level_filters::LevelFilter;

/// Compare package.json dependencies with their latest npm versions
#[derive(Parser, Debug, Clone)]
#[command(
    name = "depview",
    version,
    about = "Compare package.json dependencies with their latest published versions"
)]
pub struct CliArgs {
    /// Project directory containing package.json (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Registry base URL
    #[arg(long, value_name = "URL", default_value = NPM_REGISTRY_URL)]
    pub registry: String,

    /// Per-request timeout in seconds (default: no timeout)
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    // Output options
    /// Print a plain text table instead of the interactive view
    #[arg(long, conflicts_with = "json")]
    pub plain: bool,

    /// Output results in JSON format
    #[arg(long)]
    pub json: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable quiet mode - no progress bar, no logging
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Enable verbose (debug) logging on stderr
    #[arg(long)]
    pub verbose: bool,
}

impl CliArgs {
    /// Path of the manifest to read
    pub fn manifest_path(&self) -> PathBuf {
        manifest_path(&self.path)
    }

    /// Request timeout, if one was given
    pub fn request_timeout(&self) -> Option<Duration> {
        self.timeout.map(Duration::from_secs)
    }

    /// Default log level before `RUST_LOG` is applied
    pub fn log_level(&self) -> LevelFilter {
        if self.quiet {
            LevelFilter::OFF
        } else if self.verbose {
            LevelFilter::DEBUG
        } else {
            LevelFilter::WARN
        }
    }
}
