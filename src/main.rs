//! Hemi Testnet Runner — Entry Point
//!
//! Wiring sequence:
//! 1. Parse CLI, load config.toml (or defaults) + validate
//! 2. Init tracing (console + combined.log + error.log)
//! 3. Load the accounts file
//! 4. Resolve amount / repeat from config, or prompt for them
//! 5. Connect to the Hemi RPC and validate the chain ID
//! 6. Run deposit -> wrap -> swap rounds for every account, sequentially

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use hemi_testnet_runner::adapters::chain::{HemiProvider, SignerClientFactory};
use hemi_testnet_runner::adapters::logging;
use hemi_testnet_runner::cli::Cli;
use hemi_testnet_runner::config::loader;
use hemi_testnet_runner::domain::OperationPlan;
use hemi_testnet_runner::usecases::BatchRunner;
use hemi_testnet_runner::usecases::prompt::prompt_run_parameters;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // ── 1. Load configuration ───────────────────────────────
    let mut config = loader::load_config(&cli.config).context("Failed to load configuration")?;
    cli.apply(&mut config);

    // ── 2. Initialize logging ───────────────────────────────
    let log_dir = logging::init(&config.runner).context("Failed to initialize logging")?;

    info!(
        name = %config.runner.name,
        version = env!("CARGO_PKG_VERSION"),
        dry_run = config.runner.dry_run,
        log_dir = %log_dir.display(),
        "Starting Hemi testnet runner"
    );

    // ── 3. Load accounts ────────────────────────────────────
    let accounts = loader::load_accounts(&config.runner.accounts_file)?;

    // ── 4. Resolve run parameters ───────────────────────────
    let params = match config.run.parameters()? {
        Some(params) if !cli.interactive => params,
        _ => {
            let stdin = std::io::stdin();
            let mut stdout = std::io::stdout();
            prompt_run_parameters(&mut stdin.lock(), &mut stdout)?
        }
    };

    // ── 5. Connect to RPC ───────────────────────────────────
    let provider = HemiProvider::connect(&config.network)
        .await
        .context("Failed to connect to Hemi RPC")?;

    // ── 6. Run ──────────────────────────────────────────────
    let plan = OperationPlan::new(config.contracts.to_contracts()?, config.deposit.to_params()?);
    let runner = BatchRunner::new(
        SignerClientFactory::new(provider),
        plan,
        Duration::from_millis(config.runner.step_delay_ms),
        config.runner.dry_run,
    );

    let summary = runner.run(&accounts, params).await;

    info!(
        accounts = summary.accounts_total,
        skipped = summary.accounts_skipped,
        rounds_completed = summary.rounds_completed,
        rounds_failed = summary.rounds_failed,
        submitted = summary.operations_submitted,
        simulated = summary.operations_simulated,
        failed = summary.operations_failed,
        "Done: {summary}"
    );
    Ok(())
}
