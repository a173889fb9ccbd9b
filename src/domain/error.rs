//! Error types for dashboard operations.
//!
//! Every failure that can occur while talking to the wallet or the contract
//! is represented here. Operations that report failures to the user embed the
//! `Display` output of these errors in their notifications, so the messages
//! are kept close to what the wallet itself returned.

use thiserror::Error;

// ============================================================================
// Error Types
// ============================================================================

/// Error type for wallet and contract operations.
#[derive(Debug, Error)]
pub enum DashboardError {
    /// No wallet endpoint is configured.
    #[error("wallet not found")]
    WalletMissing,

    /// The wallet answered the JSON-RPC request with an error object.
    ///
    /// This covers user rejections (code 4001), contract reverts and any
    /// other node-side failure. The message is shown verbatim.
    #[error("{message}")]
    Rpc {
        /// JSON-RPC error code.
        code: i64,
        /// Error message reported by the wallet.
        message: String,
    },

    /// Network-related errors from HTTP requests.
    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The wallet returned a response that could not be decoded.
    #[error("invalid response: {message}")]
    Decode {
        /// Description of what failed to decode.
        message: String,
    },

    /// The wallet has no authorized account to sign with.
    #[error("no authorized account, connect the wallet first")]
    NoAccount,

    /// The fund amount is not a non-negative ether decimal.
    #[error("invalid fund amount '{input}': {reason}")]
    InvalidAmount {
        /// The raw user input.
        input: String,
        /// Why the input was rejected.
        reason: String,
    },
}

impl DashboardError {
    /// Create a new JSON-RPC error.
    #[must_use]
    pub fn rpc(code: i64, message: impl Into<String>) -> Self {
        Self::Rpc {
            code,
            message: message.into(),
        }
    }

    /// Create a new decode error with the given message.
    ///
    /// # Arguments
    ///
    /// * `message` - Description of what failed to decode
    #[must_use]
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Create a new invalid amount error.
    ///
    /// # Arguments
    ///
    /// * `input` - The rejected user input
    /// * `reason` - Why it was rejected
    #[must_use]
    pub fn invalid_amount(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidAmount {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Returns `true` if the wallet reported that the user rejected the request.
    #[must_use]
    pub fn is_user_rejection(&self) -> bool {
        matches!(self, Self::Rpc { code: 4001, .. })
    }

    /// Convert to a `color_eyre::Report` for use at the binary boundary.
    #[must_use = "this converts the error into a Report for display"]
    pub fn into_report(self) -> color_eyre::Report {
        color_eyre::eyre::eyre!("{}", self)
    }
}

// ============================================================================
// Tests
// ============================================================================
