//! The three per-round operations and the single template behind them.
//!
//! Every operation is (destination, payload constructor, amount). The
//! template is resolved into a [`TxPayload`] right before submission so
//! time-dependent fields (the swap deadline) reflect the moment of the call.

use std::fmt;

use alloy::primitives::{Address, Bytes, U256, address};

use super::payload;

/// Default bridge proxy on Hemi Sepolia.
pub const DEFAULT_BRIDGE_PROXY: Address = address!("c94b1BEe63A3e101FE5F71C80F912b4F4b055925");
/// Default WETH on Hemi Sepolia.
pub const DEFAULT_WETH: Address = address!("0C8aFD1b58aa2A5bAd2414B861D8A7fF898eDC3A");
/// Default Uniswap universal router on Hemi Sepolia.
pub const DEFAULT_UNIVERSAL_ROUTER: Address = address!("A18019E62f266C2E17e33398448e4105324e0d0F");

/// Which operation of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    /// `depositETH` on the bridge proxy.
    BridgeDeposit,
    /// `deposit()` on WETH.
    WrapWeth,
    /// WETH -> DAI through the universal router.
    SwapDai,
}

impl OperationKind {
    /// Execution order within a round.
    pub const ALL: [Self; 3] = [Self::BridgeDeposit, Self::WrapWeth, Self::SwapDai];

    pub const fn label(self) -> &'static str {
        match self {
            Self::BridgeDeposit => "bridge deposit",
            Self::WrapWeth => "wrap WETH",
            Self::SwapDai => "swap DAI",
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Destination contracts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Contracts {
    pub bridge_proxy: Address,
    pub weth: Address,
    pub universal_router: Address,
}

impl Default for Contracts {
    fn default() -> Self {
        Self {
            bridge_proxy: DEFAULT_BRIDGE_PROXY,
            weth: DEFAULT_WETH,
            universal_router: DEFAULT_UNIVERSAL_ROUTER,
        }
    }
}

/// Arguments of the bridge `depositETH` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepositParams {
    pub min_gas_limit: u32,
    pub extra_data: Bytes,
}

impl Default for DepositParams {
    fn default() -> Self {
        Self {
            min_gas_limit: 50_000,
            extra_data: Bytes::from_static(&[0x00]),
        }
    }
}

/// A fully built transaction for one operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TxPayload {
    pub kind: OperationKind,
    pub to: Address,
    pub input: Bytes,
    pub value: U256,
}

/// Everything needed to turn an [`OperationKind`] into a [`TxPayload`].
#[derive(Debug, Clone)]
pub struct OperationPlan {
    contracts: Contracts,
    deposit: DepositParams,
}

impl OperationPlan {
    pub const fn new(contracts: Contracts, deposit: DepositParams) -> Self {
        Self { contracts, deposit }
    }

    /// Build the payload for `kind` sending `value` wei, at time `now_unix`.
    pub fn build(&self, kind: OperationKind, value: U256, now_unix: u64) -> TxPayload {
        let (to, input) = match kind {
            OperationKind::BridgeDeposit => (
                self.contracts.bridge_proxy,
                payload::deposit_calldata(
                    self.deposit.min_gas_limit,
                    self.deposit.extra_data.clone(),
                ),
            ),
            OperationKind::WrapWeth => (self.contracts.weth, payload::wrap_calldata()),
            OperationKind::SwapDai => (
                self.contracts.universal_router,
                payload::swap_calldata(payload::swap_deadline(now_unix)),
            ),
        };

        TxPayload {
            kind,
            to,
            input,
            value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::sol_types::SolCall;

    use crate::domain::payload::IUniversalRouter;

    fn plan() -> OperationPlan {
        OperationPlan::new(Contracts::default(), DepositParams::default())
    }

    #[test]
    fn test_round_order() {
        assert_eq!(
            OperationKind::ALL,
            [
                OperationKind::BridgeDeposit,
                OperationKind::WrapWeth,
                OperationKind::SwapDai
            ]
        );
    }

    #[test]
    fn test_each_kind_targets_its_contract() {
        let value = U256::from(1u64);
        assert_eq!(plan().build(OperationKind::BridgeDeposit, value, 0).to, DEFAULT_BRIDGE_PROXY);
        assert_eq!(plan().build(OperationKind::WrapWeth, value, 0).to, DEFAULT_WETH);
        assert_eq!(plan().build(OperationKind::SwapDai, value, 0).to, DEFAULT_UNIVERSAL_ROUTER);
    }

    #[test]
    fn test_value_is_carried_through() {
        let value = U256::from(123_456u64);
        for kind in OperationKind::ALL {
            assert_eq!(plan().build(kind, value, 0).value, value);
        }
    }

    #[test]
    fn test_swap_deadline_uses_call_time() {
        let first = plan().build(OperationKind::SwapDai, U256::ZERO, 1_000);
        let later = plan().build(OperationKind::SwapDai, U256::ZERO, 5_000);

        let d1 = IUniversalRouter::executeCall::abi_decode(&first.input, true).unwrap();
        let d2 = IUniversalRouter::executeCall::abi_decode(&later.input, true).unwrap();
        assert_eq!(d1.deadline, U256::from(2_200u64));
        assert_eq!(d2.deadline, U256::from(6_200u64));
    }
}
