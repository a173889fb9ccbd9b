//! Transaction request and receipt types.

use alloy_primitives::{Address, B256, Bytes, U256};
use serde::Serialize;

/// Hash identifying a submitted transaction.
pub type TxHash = B256;

/// Parameters for `eth_sendTransaction`.
///
/// The wallet fills in nonce, gas and fees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransactionParams {
    pub from: Address,
    pub to: Address,
    pub data: Bytes,
    pub value: U256,
}

/// A transaction accepted by the wallet and awaiting inclusion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransactionRequest {
    pub hash: TxHash,
}

/// Receipt observed once a transaction has been mined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionReceipt {
    pub transaction_hash: TxHash,
    pub block_number: u64,
    /// `false` when the transaction was mined but reverted.
    pub status: bool,
    /// Blocks on top of (and including) the receipt's block.
    pub confirmations: u64,
}

impl TransactionReceipt {
    /// Builds a receipt, deriving the confirmation count from the chain head.
    #[must_use]
    pub fn new(transaction_hash: TxHash, block_number: u64, status: bool, head: u64) -> Self {
        Self {
            transaction_hash,
            block_number,
            status,
            confirmations: head.saturating_sub(block_number) + 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confirmations_from_head() {
        let receipt = TransactionReceipt::new(B256::repeat_byte(1), 100, true, 102);
        assert_eq!(receipt.confirmations, 3);

        // A lagging head never yields zero confirmations for a mined receipt.
        let receipt = TransactionReceipt::new(B256::repeat_byte(1), 100, true, 90);
        assert_eq!(receipt.confirmations, 1);
    }

    #[test]
    fn test_params_serialize_as_hex_quantities() {
        let params = TransactionParams {
            from: Address::repeat_byte(0x11),
            to: Address::repeat_byte(0x22),
            data: Bytes::from_static(&[0xb6, 0x0d, 0x42, 0x88]),
            value: U256::from(255u16),
        };
        let json = serde_json::to_value(&params).unwrap();
        assert_eq!(json["value"], "0xff");
        assert_eq!(json["data"], "0xb60d4288");
        assert_eq!(
            json["to"],
            "0x2222222222222222222222222222222222222222"
        );
    }
}
