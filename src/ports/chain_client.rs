//! Chain Client Port - Balance Queries and Transaction Submission
//!
//! The only two things an operation needs from a node: how much the
//! account holds, and a way to submit a signed transaction. Adapters
//! implement this with alloy-rs; tests implement it with mockall.

use alloy::primitives::{Address, TxHash, U256};
use alloy::signers::local::PrivateKeySigner;
use async_trait::async_trait;

use crate::domain::TxPayload;

/// A client bound to one signing account.
#[async_trait]
pub trait ChainClient: Send + Sync {
  /// Address of the signing account.
  fn address(&self) -> Address;

  /// Native balance of the signing account, in wei.
  async fn balance(&self) -> anyhow::Result<U256>;

  /// Sign and broadcast the payload, returning the transaction hash.
  ///
  /// Does not wait for inclusion.
  async fn submit(&self, payload: &TxPayload) -> anyhow::Result<TxHash>;
}

/// Builds a [`ChainClient`] for a signer.
///
/// One client is created per account; the runner never shares
/// clients across accounts.
pub trait ClientFactory: Send + Sync {
  /// Bind a new client to `signer`.
  fn connect(&self, signer: PrivateKeySigner) -> anyhow::Result<Box<dyn ChainClient>>;
}
