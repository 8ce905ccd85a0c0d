//! Chain Adapters - Hemi Blockchain Interaction Layer
//!
//! Provides on-chain access via alloy-rs 0.9 for:
//! - RPC endpoint validation (chain ID check at startup)
//! - Per-account signing clients (balance + send)

pub mod provider;
pub mod signer_client;

pub use provider::HemiProvider;
pub use signer_client::{SignerClient, SignerClientFactory};
