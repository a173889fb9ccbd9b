//! Wallet and contract clients.
//!
//! This module provides:
//! - [`WalletProvider`] - the wallet capability the dashboard consumes
//! - [`JsonRpcWallet`] - a wallet reached over HTTP JSON-RPC
//! - [`ContractHandle`] / [`Signer`] - signer-bound contract calls
//! - [`ConfirmationRegistry`] / [`ReceiptWatcher`] - first-confirmation tracking
//!
//! # Example
//!
//! ```ignore
//! use crate::client::{JsonRpcWallet, HttpConfig, WalletProvider};
//!
//! let wallet = JsonRpcWallet::new("http://127.0.0.1:1248", HttpConfig::default())?;
//! let accounts = wallet.request_accounts().await?;
//! ```

pub mod confirmations;
pub mod contract;
pub mod http;
pub mod rpc;

use alloy_primitives::{Address, U256};
use async_trait::async_trait;

use crate::domain::{DashboardError, TransactionParams, TransactionReceipt, TxHash};

// ============================================================================
// Re-exports
// ============================================================================

pub use confirmations::{ConfirmationRegistry, PendingConfirmation, ReceiptWatcher};
pub use contract::{ContractHandle, Signer};
pub use http::HttpConfig;
pub use rpc::JsonRpcWallet;

// ============================================================================
// Wallet Capability
// ============================================================================

/// The wallet capability: account access, balance reads, transaction
/// submission and receipt lookup.
///
/// Signing happens inside the wallet; the dashboard never sees keys.
#[async_trait]
pub trait WalletProvider: Send + Sync + std::fmt::Debug {
    /// Asks the wallet to authorize account access (`eth_requestAccounts`).
    async fn request_accounts(&self) -> Result<Vec<Address>, DashboardError>;

    /// Accounts already authorized (`eth_accounts`).
    async fn accounts(&self) -> Result<Vec<Address>, DashboardError>;

    /// Native balance of `address` at the latest block, in wei.
    async fn get_balance(&self, address: Address) -> Result<U256, DashboardError>;

    /// Submits a transaction for the wallet to sign and broadcast.
    async fn send_transaction(&self, tx: TransactionParams) -> Result<TxHash, DashboardError>;

    /// Receipt of a mined transaction, `None` while it is pending.
    async fn transaction_receipt(
        &self,
        hash: TxHash,
    ) -> Result<Option<TransactionReceipt>, DashboardError>;

    /// Current chain head.
    async fn block_number(&self) -> Result<u64, DashboardError>;
}
