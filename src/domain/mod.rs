//! Domain types for the fundboard dashboard.
//!
//! # Module Organization
//!
//! - [`error`] - Error taxonomy for wallet and contract operations
//! - [`units`] - Wei / ether conversion
//! - [`notification`] - Notifications shown to the user
//! - [`transaction`] - Transaction requests and receipts
//! - [`contract`] - ABI of the funding contract

// ============================================================================
// Module Declarations
// ============================================================================

pub mod contract;
pub mod error;
pub mod notification;
pub mod transaction;
pub mod units;

// ============================================================================
// Re-exports
// ============================================================================

pub use contract::{DEFAULT_CONTRACT_ADDRESS, fund_calldata, withdraw_calldata};
pub use error::DashboardError;
pub use notification::{Notification, Severity};
pub use transaction::{TransactionParams, TransactionReceipt, TransactionRequest, TxHash};
pub use units::{INITIAL_BALANCE, format_ether, parse_fund_amount};
