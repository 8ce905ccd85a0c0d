//! Domain layer - accounts, amounts, payloads, and operation templates.
//!
//! Pure types with no I/O. Everything here is testable without a node.

pub mod account;
pub mod amount;
pub mod error;
pub mod operation;
pub mod payload;

pub use account::{Account, normalize_private_key};
pub use amount::EthAmount;
pub use error::{DomainError, OperationError};
pub use operation::{Contracts, DepositParams, OperationKind, OperationPlan, TxPayload};

/// Operator-chosen parameters for one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunParameters {
    /// Value sent with every operation.
    pub amount: EthAmount,
    /// Rounds per account.
    pub repeat: u32,
}
