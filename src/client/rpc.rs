//! Wallet provider backed by an HTTP JSON-RPC endpoint.
//!
//! Desktop wallets and development nodes expose the same EIP-1193 request
//! methods a browser wallet injects into the page, just over HTTP. This module
//! speaks that protocol: one POST per request, a monotonically increasing id,
//! and `error` objects mapped onto [`DashboardError::Rpc`].

use std::sync::atomic::{AtomicU64, Ordering};

use alloy_primitives::{Address, U64, U256};
use async_trait::async_trait;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::{Value, json};

use super::WalletProvider;
use super::http::{HttpClient, HttpConfig};
use crate::domain::{DashboardError, TransactionParams, TransactionReceipt, TxHash};

// ============================================================================
// Wire Types
// ============================================================================

#[derive(Debug, Serialize)]
pub(crate) struct RpcRequest<'a> {
    jsonrpc: &'static str,
    id: u64,
    method: &'a str,
    params: Value,
}

impl<'a> RpcRequest<'a> {
    pub(crate) fn new(id: u64, method: &'a str, params: Value) -> Self {
        Self {
            jsonrpc: "2.0",
            id,
            method,
            params,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct RpcResponse {
    #[serde(default)]
    result: Option<Value>,
    #[serde(default)]
    error: Option<RpcErrorObject>,
}

#[derive(Debug, Deserialize)]
struct RpcErrorObject {
    code: i64,
    message: String,
}

/// Receipt as returned by `eth_getTransactionReceipt`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawReceipt {
    transaction_hash: TxHash,
    #[serde(default)]
    block_number: Option<U64>,
    #[serde(default)]
    status: Option<U64>,
}

impl RawReceipt {
    /// Converts to a domain receipt, or `None` while the block is unknown.
    pub(crate) fn into_receipt(self, head: u64) -> Option<TransactionReceipt> {
        let block = self.block_number?.to::<u64>();
        // Pre-Byzantium receipts carry no status; they only exist for mined calls.
        let status = self.status.is_none_or(|s| s == U64::from(1));
        Some(TransactionReceipt::new(
            self.transaction_hash,
            block,
            status,
            head,
        ))
    }
}

/// Decodes a JSON-RPC response into `T`, mapping error objects.
pub(crate) fn decode_response<T: DeserializeOwned>(
    response: RpcResponse,
) -> Result<T, DashboardError> {
    if let Some(err) = response.error {
        return Err(DashboardError::rpc(err.code, err.message));
    }
    let result = response.result.unwrap_or(Value::Null);
    serde_json::from_value(result).map_err(|e| DashboardError::decode(e.to_string()))
}

// ============================================================================
// JSON-RPC Wallet
// ============================================================================

/// Wallet reached through an HTTP JSON-RPC endpoint.
#[derive(Debug)]
pub struct JsonRpcWallet {
    http: HttpClient,
    url: String,
    next_id: AtomicU64,
}

impl JsonRpcWallet {
    /// Creates a wallet client for the given endpoint.
    ///
    /// # Errors
    ///
    /// Returns `DashboardError::Transport` if the HTTP client fails to initialize.
    pub fn new(url: impl Into<String>, config: HttpConfig) -> Result<Self, DashboardError> {
        Ok(Self {
            http: HttpClient::with_config(config)?,
            url: url.into(),
            next_id: AtomicU64::new(1),
        })
    }

    /// The endpoint URL.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    async fn call<T: DeserializeOwned>(
        &self,
        method: &str,
        params: Value,
    ) -> Result<T, DashboardError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let request = RpcRequest::new(id, method, params);
        tracing::debug!(method, id, "wallet request");

        let response: RpcResponse = self
            .http
            .post_json(&self.url, &request)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        decode_response(response)
            .inspect_err(|e| tracing::debug!(method, id, "wallet request failed: {e}"))
    }
}

#[async_trait]
impl WalletProvider for JsonRpcWallet {
    async fn request_accounts(&self) -> Result<Vec<Address>, DashboardError> {
        self.call("eth_requestAccounts", json!([])).await
    }

    async fn accounts(&self) -> Result<Vec<Address>, DashboardError> {
        self.call("eth_accounts", json!([])).await
    }

    async fn get_balance(&self, address: Address) -> Result<U256, DashboardError> {
        self.call("eth_getBalance", json!([address, "latest"])).await
    }

    async fn send_transaction(&self, tx: TransactionParams) -> Result<TxHash, DashboardError> {
        self.call("eth_sendTransaction", json!([tx])).await
    }

    async fn transaction_receipt(
        &self,
        hash: TxHash,
    ) -> Result<Option<TransactionReceipt>, DashboardError> {
        let raw: Option<RawReceipt> = self.call("eth_getTransactionReceipt", json!([hash])).await?;
        let Some(raw) = raw else {
            return Ok(None);
        };
        let head = self.block_number().await?;
        Ok(raw.into_receipt(head))
    }

    async fn block_number(&self) -> Result<u64, DashboardError> {
        let head: U64 = self.call("eth_blockNumber", json!([])).await?;
        Ok(head.to::<u64>())
    }
}

// ============================================================================
// Tests
// ============================================================================
