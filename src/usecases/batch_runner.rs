//! Batch Runner Use Case - Accounts x Rounds x Operations
//!
//! Walks the account list one account at a time. Each account runs
//! `repeat` rounds of deposit -> wrap -> swap with a fixed pause between
//! consecutive operations. Failures never escape `run`:
//! - a malformed key or a failed client connection skips the account
//! - a failed operation aborts the rest of its round; the next round
//!   and the next account still run

use std::fmt;
use std::time::Duration;

use alloy::primitives::{TxHash, U256};
use chrono::Utc;
use tracing::{Instrument, error, info, info_span, warn};
use uuid::Uuid;

use crate::domain::payload::SWAP_TEMPLATE_AMOUNT_WEI;
use crate::domain::{Account, OperationKind, OperationPlan, RunParameters};
use crate::ports::chain_client::{ChainClient, ClientFactory};

use super::executor;

/// Counters for one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
  /// Accounts in the input list.
  pub accounts_total: usize,
  /// Accounts skipped before any operation (bad key, connect failure).
  pub accounts_skipped: usize,
  /// Rounds where all three operations succeeded.
  pub rounds_completed: u32,
  /// Rounds aborted by a failed operation.
  pub rounds_failed: u32,
  /// Operations whose transaction was accepted by the node.
  pub operations_submitted: u32,
  /// Operations that passed the balance check in dry-run mode.
  pub operations_simulated: u32,
  /// Operations that failed.
  pub operations_failed: u32,
  /// Hashes of accepted transactions, in submission order.
  pub tx_hashes: Vec<TxHash>,
}

impl fmt::Display for RunSummary {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "{} accounts ({} skipped), rounds {} ok / {} failed, operations {} submitted / {} simulated / {} failed",
      self.accounts_total,
      self.accounts_skipped,
      self.rounds_completed,
      self.rounds_failed,
      self.operations_submitted,
      self.operations_simulated,
      self.operations_failed,
    )
  }
}

/// Drives the whole run against a [`ClientFactory`].
pub struct BatchRunner<F: ClientFactory> {
  factory: F,
  plan: OperationPlan,
  step_delay: Duration,
  dry_run: bool,
}

impl<F: ClientFactory> BatchRunner<F> {
  pub const fn new(factory: F, plan: OperationPlan, step_delay: Duration, dry_run: bool) -> Self {
    Self {
      factory,
      plan,
      step_delay,
      dry_run,
    }
  }

  /// Process every account in order.
  pub async fn run(&self, accounts: &[Account], params: RunParameters) -> RunSummary {
    let run_id = Uuid::new_v4();
    let value = params.amount.to_wei();
    let mut summary = RunSummary {
      accounts_total: accounts.len(),
      ..RunSummary::default()
    };

    let span = info_span!("run", %run_id);
    async {
      info!(
        accounts = accounts.len(),
        amount = %params.amount,
        repeat = params.repeat,
        dry_run = self.dry_run,
        "Run started"
      );

      if value != U256::from(SWAP_TEMPLATE_AMOUNT_WEI) {
        warn!(
          amount_wei = %value,
          template_wei = SWAP_TEMPLATE_AMOUNT_WEI,
          "Swap inputs are pre-encoded for 0.0001 ETH; the router only swaps that much"
        );
      }

      for (index, account) in accounts.iter().enumerate() {
        let name = account.display_name(index);
        self
          .run_account(account, params.repeat, value, &mut summary)
          .instrument(info_span!("account", %name))
          .await;
      }

      info!(
        skipped = summary.accounts_skipped,
        rounds_completed = summary.rounds_completed,
        rounds_failed = summary.rounds_failed,
        submitted = summary.operations_submitted,
        failed = summary.operations_failed,
        "Run finished"
      );
    }
    .instrument(span)
    .await;

    summary
  }

  async fn run_account(&self, account: &Account, repeat: u32, value: U256, summary: &mut RunSummary) {
    let signer = match account.signer() {
      Ok(signer) => signer,
      Err(e) => {
        error!(error = %e, "Failed to convert private key, skipping account");
        summary.accounts_skipped += 1;
        return;
      }
    };

    let client = match self.factory.connect(signer) {
      Ok(client) => client,
      Err(e) => {
        error!(error = %format!("{e:#}"), "Failed to create chain client, skipping account");
        summary.accounts_skipped += 1;
        return;
      }
    };

    info!(address = %client.address(), "Processing account");

    for round in 1..=repeat {
      if round > 1 {
        self.pause().await;
      }

      let ok = self
        .run_round(client.as_ref(), value, summary)
        .instrument(info_span!("round", round, of = repeat))
        .await;

      if ok {
        summary.rounds_completed += 1;
      } else {
        summary.rounds_failed += 1;
      }
    }
  }

  /// Returns `false` if an operation failed and the round was cut short.
  async fn run_round(&self, client: &dyn ChainClient, value: U256, summary: &mut RunSummary) -> bool {
    for (step, kind) in OperationKind::ALL.into_iter().enumerate() {
      if step > 0 {
        self.pause().await;
      }

      let now_unix = u64::try_from(Utc::now().timestamp()).unwrap_or_default();
      let payload = self.plan.build(kind, value, now_unix);

      match executor::execute(client, &payload, self.dry_run).await {
        Ok(Some(tx_hash)) => {
          summary.operations_submitted += 1;
          summary.tx_hashes.push(tx_hash);
        }
        Ok(None) => summary.operations_simulated += 1,
        Err(e) => {
          summary.operations_failed += 1;
          warn!(kind = %e.kind(), error = %e, "Deposit/swap round aborted");
          return false;
        }
      }
    }

    true
  }

  async fn pause(&self) {
    if !self.step_delay.is_zero() {
      tokio::time::sleep(self.step_delay).await;
    }
  }
}
