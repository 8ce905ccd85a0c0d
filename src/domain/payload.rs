//! Call payloads for the bridge, WETH, and universal router contracts.
//!
//! The bridge and WETH calls are encoded from their ABI. The DAI swap
//! goes through the universal router with a fixed command string and
//! two pre-encoded inputs; only the deadline is computed per call.

use alloy::primitives::{Bytes, U256, hex};
use alloy::sol;
use alloy::sol_types::SolCall;

sol! {
    interface IL1StandardBridge {
        function depositETH(uint32 _minGasLimit, bytes calldata _extraData) external payable;
    }

    interface IWETH {
        function deposit() external payable;
    }

    interface IUniversalRouter {
        function execute(bytes calldata commands, bytes[] calldata inputs, uint256 deadline) external payable;
    }
}

/// Seconds added to "now" for the router deadline.
pub const SWAP_DEADLINE_SECS: u64 = 20 * 60;

/// `WRAP_ETH` (0x0b) followed by `V3_SWAP_EXACT_IN` (0x00).
pub const SWAP_COMMANDS: [u8; 2] = hex!("0b00");

/// `WRAP_ETH(recipient = router, amountMin = 0.0001 ETH)`.
pub const WRAP_ETH_INPUT: [u8; 64] = hex!(
    "0000000000000000000000000000000000000000000000000000000000000002"
    "00000000000000000000000000000000000000000000000000005af3107a4000"
);

/// `V3_SWAP_EXACT_IN(recipient = sender, amountIn = 0.0001 ETH, path = WETH -3000-> DAI)`.
pub const V3_SWAP_EXACT_IN_INPUT: [u8; 256] = hex!(
    "0000000000000000000000000000000000000000000000000000000000000001"
    "00000000000000000000000000000000000000000000000000005af3107a4000"
    "000000000000000000000000000000000000000000000000457fd60a0614bb54"
    "00000000000000000000000000000000000000000000000000000000000000a0"
    "0000000000000000000000000000000000000000000000000000000000000000"
    "000000000000000000000000000000000000000000000000000000000000002b"
    "0c8afd1b58aa2a5bad2414b861d8a7ff898edc3a000bb8ec46e0efb2ea8152da"
    "0327a5eb3ff9a43956f13e000000000000000000000000000000000000000000"
);

/// Input amount baked into the pre-encoded swap inputs (0.0001 ETH).
pub const SWAP_TEMPLATE_AMOUNT_WEI: u64 = 100_000_000_000_000;

/// Router deadline for a swap submitted at `now_unix`.
pub const fn swap_deadline(now_unix: u64) -> u64 {
    now_unix + SWAP_DEADLINE_SECS
}

/// `depositETH(minGasLimit, extraData)` on the bridge proxy.
pub fn deposit_calldata(min_gas_limit: u32, extra_data: Bytes) -> Bytes {
    IL1StandardBridge::depositETHCall {
        _minGasLimit: min_gas_limit,
        _extraData: extra_data,
    }
    .abi_encode()
    .into()
}

/// `deposit()` on WETH.
pub fn wrap_calldata() -> Bytes {
    IWETH::depositCall {}.abi_encode().into()
}

/// `execute(commands, inputs, deadline)` on the universal router.
pub fn swap_calldata(deadline: u64) -> Bytes {
    IUniversalRouter::executeCall {
        commands: Bytes::from_static(&SWAP_COMMANDS),
        inputs: vec![
            Bytes::from_static(&WRAP_ETH_INPUT),
            Bytes::from_static(&V3_SWAP_EXACT_IN_INPUT),
        ],
        deadline: U256::from(deadline),
    }
    .abi_encode()
    .into()
}
