//! Configuration Loader - File Loading and Validation
//!
//! Handles loading `config.toml` and the accounts file, applying
//! environment overrides, validating all parameters, and providing
//! clear error messages for misconfiguration.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use super::{AccountsFile, AppConfig};
use crate::domain::Account;

/// Overrides `network.rpc_url`.
pub const ENV_RPC_URL: &str = "HEMI_RPC_URL";
/// Overrides `runner.accounts_file`.
pub const ENV_ACCOUNTS_FILE: &str = "HEMI_ACCOUNTS_FILE";

/// Load and validate configuration from a TOML file.
///
/// A missing file is not an error: every section has defaults.
///
/// # Errors
/// Returns detailed error if:
/// - The file exists but can't be read
/// - TOML parsing fails
/// - Validation rules are violated
pub fn load_config(path: &str) -> Result<AppConfig> {
  let path = Path::new(path);

  let mut config = if path.exists() {
    let content = std::fs::read_to_string(path)
      .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    parse_config(&content)?
  } else {
    AppConfig::default()
  };

  apply_env_overrides(&mut config, |key| std::env::var(key).ok());
  validate_config(&config)?;

  Ok(config)
}

/// Parse a TOML document into an [`AppConfig`] without validating it.
pub fn parse_config(content: &str) -> Result<AppConfig> {
  toml::from_str(content).with_context(|| "Failed to parse config.toml")
}

/// Apply `HEMI_*` overrides using `lookup` to read variables.
pub fn apply_env_overrides<F>(config: &mut AppConfig, lookup: F)
where
  F: Fn(&str) -> Option<String>,
{
  if let Some(url) = lookup(ENV_RPC_URL).filter(|v| !v.trim().is_empty()) {
    config.network.rpc_url = url;
  }
  if let Some(file) = lookup(ENV_ACCOUNTS_FILE).filter(|v| !v.trim().is_empty()) {
    config.runner.accounts_file = file;
  }
}

/// Load the account list.
///
/// Keys are not parsed here; a malformed key only skips its account
/// at run time.
///
/// # Errors
/// Fails if the file can't be read or parsed, or lists no accounts.
pub fn load_accounts(path: &str) -> Result<Vec<Account>> {
  let path = Path::new(path);

  let content = std::fs::read_to_string(path)
    .with_context(|| format!("Failed to read accounts file: {}", path.display()))?;

  let accounts = parse_accounts(&content)?;

  info!(
    accounts = accounts.len(),
    file = %path.display(),
    "Accounts loaded"
  );

  Ok(accounts)
}

/// Parse and check the accounts document.
pub fn parse_accounts(content: &str) -> Result<Vec<Account>> {
  let file: AccountsFile =
    toml::from_str(content).with_context(|| "Failed to parse accounts file")?;

  anyhow::ensure!(
    !file.accounts.is_empty(),
    "At least one account must be configured"
  );

  Ok(file.accounts)
}

/// Validate all configuration parameters.
///
/// Checks for:
/// - Non-empty RPC URL and non-zero chain ID
/// - Parseable contract addresses and deposit extra data
/// - UTC offset within -12..=14 hours
/// - Positive repeat count and a valid amount when configured
pub fn validate_config(config: &AppConfig) -> Result<()> {
  anyhow::ensure!(
    !config.network.rpc_url.trim().is_empty(),
    "RPC URL must not be empty"
  );
  anyhow::ensure!(config.network.chain_id > 0, "chain_id must be non-zero");

  config.contracts.to_contracts()?;
  config.deposit.to_params()?;

  anyhow::ensure!(
    (-12..=14).contains(&config.runner.utc_offset_hours),
    "utc_offset_hours must be in [-12, 14], got {}",
    config.runner.utc_offset_hours
  );
  anyhow::ensure!(
    !config.runner.accounts_file.trim().is_empty(),
    "accounts_file must not be empty"
  );

  if let Some(repeat) = config.run.repeat {
    anyhow::ensure!(repeat > 0, "run.repeat must be positive, got {repeat}");
  }
  if let Some(amount) = &config.run.amount_eth {
    crate::domain::EthAmount::parse(amount)
      .with_context(|| "run.amount_eth is invalid")?;
  }

  Ok(())
}
