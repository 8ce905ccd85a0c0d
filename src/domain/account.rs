//! Accounts and private-key handling.
//!
//! An account is nothing more than a hex private key plus an optional
//! label for log output. Keys are normalized to carry a `0x` prefix
//! before parsing, and never appear in `Debug` output or errors.

use std::fmt;
use std::str::FromStr;

use alloy::signers::local::PrivateKeySigner;
use serde::Deserialize;

use super::error::DomainError;

/// One signing identity from the accounts file.
#[derive(Clone, Deserialize)]
pub struct Account {
    /// Optional human-readable name used in log records.
    #[serde(default)]
    pub label: Option<String>,
    /// Hex-encoded secp256k1 secret, with or without `0x`.
    pub private_key: String,
}

impl fmt::Debug for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Account")
            .field("label", &self.label)
            .field("private_key", &"<redacted>")
            .finish()
    }
}

impl Account {
    pub fn new(private_key: impl Into<String>) -> Self {
        Self {
            label: None,
            private_key: private_key.into(),
        }
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Name shown in logs: the label, or `account-<n>` (1-based).
    pub fn display_name(&self, index: usize) -> String {
        match &self.label {
            Some(label) if !label.trim().is_empty() => label.trim().to_string(),
            _ => format!("account-{}", index + 1),
        }
    }

    /// The key with a guaranteed `0x` prefix.
    pub fn normalized_key(&self) -> String {
        normalize_private_key(&self.private_key)
    }

    /// Parse the normalized key into a local signer.
    ///
    /// # Errors
    /// Returns [`DomainError::InvalidPrivateKey`] for anything that is not
    /// a valid 32-byte hex scalar. The error message does not echo the key.
    pub fn signer(&self) -> Result<PrivateKeySigner, DomainError> {
        PrivateKeySigner::from_str(&self.normalized_key()).map_err(|e| {
            DomainError::InvalidPrivateKey {
                reason: e.to_string(),
            }
        })
    }
}

/// Trim surrounding whitespace and prepend `0x` when missing.
pub fn normalize_private_key(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.starts_with("0x") || trimmed.starts_with("0X") {
        format!("0x{}", &trimmed[2..])
    } else {
        format!("0x{trimmed}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Well-known anvil test key #0.
    const KEY: &str = "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
    const ADDRESS: &str = "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266";

    #[test]
    fn test_normalize_adds_prefix() {
        assert_eq!(normalize_private_key(KEY), format!("0x{KEY}"));
    }

    #[test]
    fn test_normalize_keeps_existing_prefix() {
        let prefixed = format!("0x{KEY}");
        assert_eq!(normalize_private_key(&prefixed), prefixed);
        assert_eq!(normalize_private_key(&format!("0X{KEY}")), prefixed);
    }

    #[test]
    fn test_normalize_trims_whitespace() {
        assert_eq!(normalize_private_key(&format!("  {KEY}\n")), format!("0x{KEY}"));
    }

    #[test]
    fn test_signer_from_unprefixed_key() {
        let signer = Account::new(KEY).signer().unwrap();
        assert_eq!(signer.address().to_string(), ADDRESS);
    }

    #[test]
    fn test_signer_rejects_malformed_key() {
        let err = Account::new("not-a-key").signer().unwrap_err();
        assert!(matches!(err, DomainError::InvalidPrivateKey { .. }));
        assert!(!err.to_string().contains("not-a-key"));
    }

    #[test]
    fn test_debug_redacts_key() {
        let rendered = format!("{:?}", Account::new(KEY));
        assert!(!rendered.contains(KEY));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn test_display_name() {
        assert_eq!(Account::new(KEY).display_name(0), "account-1");
        assert_eq!(Account::new(KEY).with_label("main").display_name(4), "main");
        assert_eq!(Account::new(KEY).with_label("  ").display_name(2), "account-3");
    }
}
