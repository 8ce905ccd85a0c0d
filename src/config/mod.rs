//! Configuration Module - TOML-based Runner Configuration
//!
//! Loads and validates `config.toml` (runner, network, contracts,
//! deposit arguments, run parameters) and the separate accounts file.
//! Every section has defaults matching Hemi Sepolia, so a config file
//! only needs to name what differs.

pub mod loader;

use alloy::primitives::{Address, Bytes};
use anyhow::{Context, Result};
use serde::Deserialize;

use crate::domain::operation::{
  DEFAULT_BRIDGE_PROXY, DEFAULT_UNIVERSAL_ROUTER, DEFAULT_WETH,
};
use crate::domain::{Account, Contracts, DepositParams, EthAmount, RunParameters};

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
  /// Runner identity, logging, and pacing.
  #[serde(default)]
  pub runner: RunnerConfig,
  /// RPC endpoint.
  #[serde(default)]
  pub network: NetworkConfig,
  /// Destination contracts.
  #[serde(default)]
  pub contracts: ContractConfig,
  /// Bridge `depositETH` arguments.
  #[serde(default)]
  pub deposit: DepositConfig,
  /// Amount and repeat count; prompted for when absent.
  #[serde(default)]
  pub run: RunConfig,
}

/// Runner identity, logging, and pacing.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RunnerConfig {
  /// Human-readable runner name.
  pub name: String,
  /// Log level (trace, debug, info, warn, error).
  pub log_level: String,
  /// Directory holding `combined.log` and `error.log`.
  pub log_dir: String,
  /// UTC offset applied to log timestamps.
  pub utc_offset_hours: i32,
  /// Pause between consecutive operations on the same account.
  pub step_delay_ms: u64,
  /// Check balances but never submit.
  pub dry_run: bool,
  /// Path of the accounts file.
  pub accounts_file: String,
}

impl Default for RunnerConfig {
  fn default() -> Self {
    Self {
      name: "hemi-testnet-runner".to_string(),
      log_level: "info".to_string(),
      log_dir: ".".to_string(),
      utc_offset_hours: 8,
      step_delay_ms: 5_000,
      dry_run: false,
      accounts_file: "accounts.toml".to_string(),
    }
  }
}

/// RPC endpoint configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
  /// Hemi JSON-RPC endpoint.
  pub rpc_url: String,
  /// Expected chain ID (Hemi Sepolia = 743111).
  pub chain_id: u64,
}

impl Default for NetworkConfig {
  fn default() -> Self {
    Self {
      rpc_url: "https://testnet.rpc.hemi.network/rpc".to_string(),
      chain_id: 743_111,
    }
  }
}

/// Contract addresses as hex strings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ContractConfig {
  pub bridge_proxy: String,
  pub weth: String,
  pub universal_router: String,
}

impl Default for ContractConfig {
  fn default() -> Self {
    Self {
      bridge_proxy: DEFAULT_BRIDGE_PROXY.to_string(),
      weth: DEFAULT_WETH.to_string(),
      universal_router: DEFAULT_UNIVERSAL_ROUTER.to_string(),
    }
  }
}

impl ContractConfig {
  /// Parse all three addresses.
  pub fn to_contracts(&self) -> Result<Contracts> {
    let parse = |name: &str, raw: &str| -> Result<Address> {
      raw
        .trim()
        .parse()
        .with_context(|| format!("Invalid {name} address: {raw}"))
    };

    Ok(Contracts {
      bridge_proxy: parse("bridge_proxy", &self.bridge_proxy)?,
      weth: parse("weth", &self.weth)?,
      universal_router: parse("universal_router", &self.universal_router)?,
    })
  }
}

/// Bridge `depositETH` arguments.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DepositConfig {
  /// Minimum L2 gas limit forwarded to the bridge.
  pub min_gas_limit: u32,
  /// Hex-encoded extra data forwarded to the bridge.
  pub extra_data: String,
}

impl Default for DepositConfig {
  fn default() -> Self {
    Self {
      min_gas_limit: 50_000,
      extra_data: "0x00".to_string(),
    }
  }
}

impl DepositConfig {
  pub fn to_params(&self) -> Result<DepositParams> {
    let extra_data: Bytes = self
      .extra_data
      .trim()
      .parse()
      .with_context(|| format!("Invalid deposit extra_data: {}", self.extra_data))?;

    Ok(DepositParams {
      min_gas_limit: self.min_gas_limit,
      extra_data,
    })
  }
}

/// Amount and repeat count.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RunConfig {
  /// ETH sent with each operation, as a decimal string.
  pub amount_eth: Option<String>,
  /// Rounds per account.
  pub repeat: Option<u32>,
}

impl RunConfig {
  /// `Some` only when both values are configured.
  pub fn parameters(&self) -> Result<Option<RunParameters>> {
    match (&self.amount_eth, self.repeat) {
      (Some(amount), Some(repeat)) => Ok(Some(RunParameters {
        amount: EthAmount::parse(amount)?,
        repeat,
      })),
      _ => Ok(None),
    }
  }
}

/// Contents of the accounts file.
#[derive(Debug, Clone, Deserialize)]
pub struct AccountsFile {
  #[serde(default)]
  pub accounts: Vec<Account>,
}
