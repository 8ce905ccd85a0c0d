//! Hemi RPC Provider - alloy-rs 0.9 Connection Check
//!
//! Validates RPC connectivity and the chain ID at startup. Per-account
//! clients are built from the validated URL afterwards, so a wrong
//! endpoint fails the run before any key is touched.

use alloy::providers::{Provider, ProviderBuilder};
use alloy::transports::http::reqwest::Url;
use anyhow::{Context, Result};
use tracing::{info, instrument};

use crate::config::NetworkConfig;

/// A validated Hemi JSON-RPC endpoint.
#[derive(Debug, Clone)]
pub struct HemiProvider {
    /// Endpoint URL (may carry an API key, never logged).
    rpc_url: Url,
    /// Chain ID reported by the node.
    chain_id: u64,
}

impl HemiProvider {
    /// Connect to the RPC and validate the chain ID.
    ///
    /// Fails if the URL is malformed, the node is unreachable, or it
    /// reports a chain ID other than `config.chain_id`.
    #[instrument(skip_all)]
    pub async fn connect(config: &NetworkConfig) -> Result<Self> {
        let rpc_url: Url = config.rpc_url.parse().context("Invalid RPC URL")?;

        let provider = ProviderBuilder::new().on_http(rpc_url.clone());

        let chain_id = provider
            .get_chain_id()
            .await
            .context("Failed to query chain ID")?;

        if chain_id != config.chain_id {
            anyhow::bail!(
                "Expected chain_id={}, RPC reports {chain_id}",
                config.chain_id
            );
        }

        info!(chain_id, host = endpoint_host(&rpc_url), "Connected to Hemi RPC");

        Ok(Self { rpc_url, chain_id })
    }

    pub fn rpc_url(&self) -> &Url {
        &self.rpc_url
    }

    pub const fn chain_id(&self) -> u64 {
        self.chain_id
    }
}

/// Host part of an RPC URL, safe to log (drops path, query, and userinfo).
pub fn endpoint_host(url: &Url) -> &str {
    url.host_str().unwrap_or("<no host>")
}
