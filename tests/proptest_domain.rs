//! Property-Based Tests — Domain Layer Invariants
//!
//! Uses `proptest` to check amount parsing and key normalization
//! across random inputs.

use alloy::primitives::U256;
use proptest::prelude::*;
use rust_decimal_macros::dec;

use hemi_testnet_runner::domain::{Account, EthAmount, normalize_private_key};

// ── Key normalization ───────────────────────────────────────

proptest! {
    /// Normalized keys always start with exactly one `0x`.
    #[test]
    fn normalized_key_has_single_prefix(hex in "[0-9a-f]{64}", prefixed in any::<bool>()) {
        let raw = if prefixed { format!("0x{hex}") } else { hex.clone() };
        let normalized = normalize_private_key(&raw);
        prop_assert_eq!(normalized, format!("0x{hex}"));
    }

    /// Normalizing twice is the same as normalizing once.
    #[test]
    fn normalization_is_idempotent(raw in "[ \t]{0,2}(0x)?[0-9a-fA-F]{1,64}[ \t]{0,2}") {
        let once = normalize_private_key(&raw);
        prop_assert_eq!(normalize_private_key(&once), once.clone());
    }

    /// Prefixed and unprefixed forms derive the same signer.
    #[test]
    fn prefix_does_not_change_address(hex in "[1-9a-f][0-9a-f]{63}") {
        let plain = Account::new(hex.clone()).signer();
        let prefixed = Account::new(format!("0x{hex}")).signer();
        match (plain, prefixed) {
            (Ok(a), Ok(b)) => prop_assert_eq!(a.address(), b.address()),
            (Err(_), Err(_)) => {}
            _ => prop_assert!(false, "prefix changed parse outcome"),
        }
    }
}

// ── ETH amounts ─────────────────────────────────────────────

proptest! {
    /// Integer wei amounts written as ETH convert back exactly.
    #[test]
    fn wei_round_trips_through_decimal(wei in 1u64..u64::MAX) {
        let whole = wei / 1_000_000_000_000_000_000;
        let frac = wei % 1_000_000_000_000_000_000;
        let text = format!("{whole}.{frac:018}");
        let amount = EthAmount::parse(&text).unwrap();
        prop_assert_eq!(amount.to_wei(), U256::from(wei));
    }

    /// Non-positive amounts are always rejected.
    #[test]
    fn non_positive_rejected(n in 0u64..1_000_000) {
        let negative = format!("-{}", n + 1);
        prop_assert!(EthAmount::parse(&negative).is_err());
        prop_assert!(EthAmount::parse("0").is_err());
    }
}

#[test]
fn decimal_is_normalized() {
    let amount = EthAmount::parse("1.50").unwrap();
    assert_eq!(amount.as_decimal(), dec!(1.5));
}
