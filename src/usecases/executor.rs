//! Operation Executor - Check Balance, Submit, Log
//!
//! The one template all three operations share:
//! read balance, refuse when it cannot cover the value, submit,
//! log the hash or the failure. Nothing is retried.

use alloy::primitives::TxHash;
use tracing::{error, info, instrument, warn};

use crate::domain::{OperationError, TxPayload};
use crate::ports::chain_client::ChainClient;

/// Run one operation for the client's account.
///
/// Returns `Ok(None)` in dry-run mode after a successful balance check.
///
/// # Errors
/// - [`OperationError::BalanceQuery`] if the balance can't be read
/// - [`OperationError::InsufficientBalance`] if balance < `payload.value`;
///   `submit` is never called in that case
/// - [`OperationError::Submission`] if the node rejects the transaction
#[instrument(skip_all, fields(kind = %payload.kind, to = %payload.to, value = %payload.value))]
pub async fn execute(
  client: &dyn ChainClient,
  payload: &TxPayload,
  dry_run: bool,
) -> Result<Option<TxHash>, OperationError> {
  let kind = payload.kind;

  let balance = client.balance().await.map_err(|source| {
    error!(error = %format!("{source:#}"), "Balance query failed");
    OperationError::BalanceQuery { kind, source }
  })?;

  if balance < payload.value {
    error!(
      %balance,
      required = %payload.value,
      "Insufficient balance, deposit ETH first"
    );
    return Err(OperationError::InsufficientBalance {
      kind,
      balance,
      required: payload.value,
    });
  }

  if dry_run {
    warn!(%balance, "Dry-run: balance sufficient, transaction NOT submitted");
    return Ok(None);
  }

  match client.submit(payload).await {
    Ok(tx_hash) => {
      info!(%tx_hash, "Transaction submitted");
      Ok(Some(tx_hash))
    }
    Err(source) => {
      error!(error = %format!("{source:#}"), "Transaction submission failed");
      Err(OperationError::Submission { kind, source })
    }
  }
}
