//! ETH amounts entered by the operator.
//!
//! Parsed with `rust_decimal` so that "0.0001" converts to wei exactly,
//! with no float rounding on the way.

use std::fmt;
use std::str::FromStr;

use alloy::primitives::U256;
use rust_decimal::Decimal;

use super::error::DomainError;

/// Number of decimals of native ETH.
pub const ETH_DECIMALS: u32 = 18;

/// A strictly positive ETH amount with at most 18 fractional digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EthAmount(Decimal);

impl EthAmount {
    /// Parse a decimal ETH amount such as `"0.0001"`.
    ///
    /// # Errors
    /// Rejects empty, non-numeric, zero, negative, and over-precise input.
    pub fn parse(input: &str) -> Result<Self, DomainError> {
        let invalid = |reason| DomainError::InvalidAmount {
            input: input.to_string(),
            reason,
        };

        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(invalid("amount is empty"));
        }

        let value = Decimal::from_str(trimmed).map_err(|_| invalid("not a decimal number"))?;
        let value = value.normalize();

        if value.is_sign_negative() && !value.is_zero() {
            return Err(invalid("amount is negative"));
        }
        if value.is_zero() {
            return Err(invalid("amount must be greater than zero"));
        }
        if value.scale() > ETH_DECIMALS {
            return Err(invalid("more than 18 decimal places"));
        }

        Ok(Self(value))
    }

    /// The amount in wei.
    pub fn to_wei(self) -> U256 {
        // Positive and normalized, so the mantissa fits in u128.
        let mantissa = U256::from(self.0.mantissa().unsigned_abs());
        let shift = ETH_DECIMALS - self.0.scale();
        mantissa * U256::from(10u64).pow(U256::from(shift))
    }

    pub const fn as_decimal(&self) -> Decimal {
        self.0
    }
}

impl FromStr for EthAmount {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for EthAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ETH", self.0)
    }
}
