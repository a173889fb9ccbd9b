//! Interface of the funding contract.
//!
//! The dashboard only ever calls two methods, so the ABI is declared inline
//! instead of being loaded from a JSON artifact.

use alloy_primitives::{Address, Bytes, address};
use alloy_sol_types::{SolCall, sol};

sol! {
    /// Payable funding contract with an owner-only withdrawal.
    interface IFundMe {
        function fund() external payable;
        function withdraw() external;
    }
}

/// Address the dashboard talks to when no other address is configured.
pub const DEFAULT_CONTRACT_ADDRESS: Address = address!("0x5FbDB2315678afecb367f032d93F642f64180aa3");

/// Calldata for `fund()`.
#[must_use]
pub fn fund_calldata() -> Bytes {
    IFundMe::fundCall {}.abi_encode().into()
}

/// Calldata for `withdraw()`.
#[must_use]
pub fn withdraw_calldata() -> Bytes {
    IFundMe::withdrawCall {}.abi_encode().into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calldata_is_bare_selector() {
        assert_eq!(fund_calldata().as_ref(), &[0xb6, 0x0d, 0x42, 0x88]);
        assert_eq!(withdraw_calldata().as_ref(), &[0x3c, 0xcf, 0xd6, 0x0b]);
    }
}
