//! Domain error types.
//!
//! `DomainError` covers malformed user input (keys, amounts).
//! `OperationError` covers the three ways a single check-then-submit
//! operation can fail. Neither type ever carries key material.

use alloy::primitives::U256;
use thiserror::Error;

use super::operation::OperationKind;

/// Invalid user-supplied input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    /// The private key could not be parsed into a signer.
    #[error("invalid private key: {reason}")]
    InvalidPrivateKey {
        /// Parser message (never includes the key itself).
        reason: String,
    },

    /// The ETH amount is not a positive decimal with at most 18 decimals.
    #[error("invalid ETH amount {input:?}: {reason}")]
    InvalidAmount {
        /// Raw user input.
        input: String,
        /// Why it was rejected.
        reason: &'static str,
    },
}

/// Failure of one operation at the operation boundary.
#[derive(Debug, Error)]
pub enum OperationError {
    /// The balance query itself failed.
    #[error("{kind}: balance query failed: {source:#}")]
    BalanceQuery {
        kind: OperationKind,
        #[source]
        source: anyhow::Error,
    },

    /// The account cannot cover the value of the transaction.
    #[error("{kind}: insufficient balance, have {balance} wei, need {required} wei")]
    InsufficientBalance {
        kind: OperationKind,
        balance: U256,
        required: U256,
    },

    /// The node rejected the transaction or the transport failed.
    #[error("{kind}: transaction submission failed: {source:#}")]
    Submission {
        kind: OperationKind,
        #[source]
        source: anyhow::Error,
    },
}

impl OperationError {
    /// Which operation produced this error.
    pub const fn kind(&self) -> OperationKind {
        match self {
            Self::BalanceQuery { kind, .. }
            | Self::InsufficientBalance { kind, .. }
            | Self::Submission { kind, .. } => *kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insufficient_balance_message() {
        let err = OperationError::InsufficientBalance {
            kind: OperationKind::WrapWeth,
            balance: U256::from(5u64),
            required: U256::from(10u64),
        };
        assert_eq!(
            err.to_string(),
            "wrap WETH: insufficient balance, have 5 wei, need 10 wei"
        );
        assert_eq!(err.kind(), OperationKind::WrapWeth);
    }

    #[test]
    fn test_submission_message_includes_cause() {
        let err = OperationError::Submission {
            kind: OperationKind::SwapDai,
            source: anyhow::anyhow!("nonce too low"),
        };
        assert!(err.to_string().contains("nonce too low"));
    }
}
