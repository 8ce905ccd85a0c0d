//! Command-line arguments.
//!
//! Unknown flags are rejected by clap, so a mistyped option never falls
//! through to a live run.

use clap::Parser;

use crate::config::AppConfig;

/// Sequential bridge-deposit and swap runner for Hemi Sepolia accounts
#[derive(Debug, Parser)]
#[command(name = "hemi-testnet-runner", version)]
pub struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long, env = "HEMI_CONFIG", default_value = "config.toml")]
    pub config: String,

    /// Always prompt for amount and repeat count, even if configured
    #[arg(short, long)]
    pub interactive: bool,

    /// Check balances but never submit transactions
    #[arg(long)]
    pub dry_run: bool,
}

impl Cli {
    /// Fold command-line overrides into the loaded config.
    ///
    /// `--dry-run` can only turn dry-run on, never off.
    pub fn apply(&self, config: &mut AppConfig) {
        if self.dry_run {
            config.runner.dry_run = true;
        }
    }
}
