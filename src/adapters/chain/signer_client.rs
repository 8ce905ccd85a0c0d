//! Signer Client - per-account `ChainClient` over alloy-rs 0.9
//!
//! Balance queries go through a plain HTTP provider. Submissions go
//! through a provider with the recommended fillers (nonce, gas, chain
//! ID) and an `EthereumWallet`, so the node only ever sees signed raw
//! transactions.

use alloy::network::{EthereumWallet, TransactionBuilder};
use alloy::primitives::{Address, TxHash, U256};
use alloy::providers::{Provider, ProviderBuilder};
use alloy::rpc::types::TransactionRequest;
use alloy::signers::local::PrivateKeySigner;
use alloy::transports::http::reqwest::Url;
use anyhow::{Context, Result};
use async_trait::async_trait;
use tracing::{debug, instrument};

use crate::domain::TxPayload;
use crate::ports::chain_client::{ChainClient, ClientFactory};

use super::provider::HemiProvider;

/// A `ChainClient` bound to one private key.
pub struct SignerClient {
    rpc_url: Url,
    chain_id: u64,
    address: Address,
    wallet: EthereumWallet,
}

impl SignerClient {
    pub fn new(rpc_url: Url, chain_id: u64, signer: PrivateKeySigner) -> Self {
        let address = signer.address();
        Self {
            rpc_url,
            chain_id,
            address,
            wallet: EthereumWallet::from(signer),
        }
    }

    fn request_for(&self, payload: &TxPayload) -> TransactionRequest {
        TransactionRequest::default()
            .with_from(self.address)
            .with_to(payload.to)
            .with_input(payload.input.clone())
            .with_value(payload.value)
            .with_chain_id(self.chain_id)
    }
}

#[async_trait]
impl ChainClient for SignerClient {
    fn address(&self) -> Address {
        self.address
    }

    #[instrument(skip(self), fields(address = %self.address))]
    async fn balance(&self) -> Result<U256> {
        let provider = ProviderBuilder::new().on_http(self.rpc_url.clone());

        let balance = provider
            .get_balance(self.address)
            .await
            .context("eth_getBalance failed")?;

        debug!(%balance, "Balance fetched");
        Ok(balance)
    }

    #[instrument(skip_all, fields(address = %self.address, kind = %payload.kind, to = %payload.to))]
    async fn submit(&self, payload: &TxPayload) -> Result<TxHash> {
        let provider = ProviderBuilder::new()
            .with_recommended_fillers()
            .wallet(self.wallet.clone())
            .on_http(self.rpc_url.clone());

        let pending = provider
            .send_transaction(self.request_for(payload))
            .await
            .context("eth_sendRawTransaction failed")?;

        Ok(*pending.tx_hash())
    }
}

/// Builds a [`SignerClient`] per account against a validated provider.
pub struct SignerClientFactory {
    provider: HemiProvider,
}

impl SignerClientFactory {
    pub const fn new(provider: HemiProvider) -> Self {
        Self { provider }
    }
}

impl ClientFactory for SignerClientFactory {
    fn connect(&self, signer: PrivateKeySigner) -> Result<Box<dyn ChainClient>> {
        Ok(Box::new(SignerClient::new(
            self.provider.rpc_url().clone(),
            self.provider.chain_id(),
            signer,
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::{Bytes, address};

    use crate::domain::OperationKind;

    const KEY: &str = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

    fn client() -> SignerClient {
        let signer: PrivateKeySigner = KEY.parse().unwrap();
        SignerClient::new("http://127.0.0.1:8545".parse().unwrap(), 743_111, signer)
    }

    #[test]
    fn test_address_derived_from_signer() {
        assert_eq!(
            client().address(),
            address!("f39Fd6e51aad88F6F4ce6aB8827279cffFb92266")
        );
    }

    #[test]
    fn test_request_carries_payload_fields() {
        let payload = TxPayload {
            kind: OperationKind::WrapWeth,
            to: address!("0C8aFD1b58aa2A5bAd2414B861D8A7fF898eDC3A"),
            input: Bytes::from_static(&[0xd0, 0xe3, 0x0d, 0xb0]),
            value: U256::from(42u64),
        };

        let c = client();
        let req = c.request_for(&payload);
        assert_eq!(req.from, Some(c.address()));
        assert_eq!(req.value, Some(U256::from(42u64)));
        assert_eq!(req.chain_id, Some(743_111));
        assert_eq!(req.input.input().cloned(), Some(payload.input.clone()));
    }
}
