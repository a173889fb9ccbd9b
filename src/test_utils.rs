//! Shared test fixtures.
//!
//! [`MockWallet`] is a scripted in-memory wallet: it records every call,
//! hands out sequential transaction hashes and only reports receipts for
//! hashes a test has explicitly mined.

use std::collections::HashSet;
use std::sync::Mutex;

use alloy_primitives::{Address, B256, U256, address};
use async_trait::async_trait;

use crate::client::WalletProvider;
use crate::domain::{DashboardError, TransactionParams, TransactionReceipt, TxHash};

/// Block height reported by the mock chain.
const MOCK_HEAD: u64 = 100;

#[derive(Debug, Default)]
struct MockState {
    request_accounts_calls: usize,
    balance_queries: Vec<Address>,
    sent: Vec<TransactionParams>,
    mined: HashSet<TxHash>,
    next_hash: u64,
}

/// In-memory [`WalletProvider`] for tests.
#[derive(Debug)]
pub struct MockWallet {
    accounts: Vec<Address>,
    balance: U256,
    send_error: Option<(i64, String)>,
    request_accounts_error: Option<(i64, String)>,
    state: Mutex<MockState>,
}

impl MockWallet {
    /// The single account the mock authorizes.
    pub const ACCOUNT: Address = address!("0x70997970C51812dc3A010C7d01b50e0d17dc79C8");

    pub fn new() -> Self {
        Self {
            accounts: vec![Self::ACCOUNT],
            balance: U256::ZERO,
            send_error: None,
            request_accounts_error: None,
            state: Mutex::new(MockState::default()),
        }
    }

    pub fn with_balance(mut self, wei: U256) -> Self {
        self.balance = wei;
        self
    }

    pub fn without_accounts(mut self) -> Self {
        self.accounts.clear();
        self
    }

    /// Every `eth_sendTransaction` fails with the given JSON-RPC error.
    pub fn failing_send(mut self, code: i64, message: &str) -> Self {
        self.send_error = Some((code, message.to_string()));
        self
    }

    /// `eth_requestAccounts` fails with the given JSON-RPC error.
    pub fn rejecting_accounts(mut self, code: i64, message: &str) -> Self {
        self.request_accounts_error = Some((code, message.to_string()));
        self
    }

    /// Marks `hash` as mined so its receipt becomes visible.
    pub fn mine(&self, hash: TxHash) {
        self.state.lock().unwrap().mined.insert(hash);
    }

    pub fn sent_transactions(&self) -> Vec<TransactionParams> {
        self.state.lock().unwrap().sent.clone()
    }

    pub fn request_accounts_calls(&self) -> usize {
        self.state.lock().unwrap().request_accounts_calls
    }

    pub fn balance_queries(&self) -> Vec<Address> {
        self.state.lock().unwrap().balance_queries.clone()
    }

    /// Hash the mock will return for the `n`th submitted transaction (1-based).
    pub fn hash_for(n: u64) -> TxHash {
        B256::left_padding_from(&n.to_be_bytes())
    }
}

impl Default for MockWallet {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl WalletProvider for MockWallet {
    async fn request_accounts(&self) -> Result<Vec<Address>, DashboardError> {
        self.state.lock().unwrap().request_accounts_calls += 1;
        match &self.request_accounts_error {
            Some((code, message)) => Err(DashboardError::rpc(*code, message.clone())),
            None => Ok(self.accounts.clone()),
        }
    }

    async fn accounts(&self) -> Result<Vec<Address>, DashboardError> {
        Ok(self.accounts.clone())
    }

    async fn get_balance(&self, address: Address) -> Result<U256, DashboardError> {
        self.state.lock().unwrap().balance_queries.push(address);
        Ok(self.balance)
    }

    async fn send_transaction(&self, tx: TransactionParams) -> Result<TxHash, DashboardError> {
        if let Some((code, message)) = &self.send_error {
            return Err(DashboardError::rpc(*code, message.clone()));
        }
        let mut state = self.state.lock().unwrap();
        state.sent.push(tx);
        state.next_hash += 1;
        Ok(Self::hash_for(state.next_hash))
    }

    async fn transaction_receipt(
        &self,
        hash: TxHash,
    ) -> Result<Option<TransactionReceipt>, DashboardError> {
        let mined = self.state.lock().unwrap().mined.contains(&hash);
        Ok(mined.then(|| TransactionReceipt::new(hash, MOCK_HEAD, true, MOCK_HEAD)))
    }

    async fn block_number(&self) -> Result<u64, DashboardError> {
        Ok(MOCK_HEAD)
    }
}

/// Flattens a rendered buffer into lines of text.
pub fn buffer_to_string(buffer: &ratatui::buffer::Buffer) -> String {
    let area = buffer.area();
    let mut result = String::new();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            result.push_str(buffer[(x, y)].symbol());
        }
        if y + 1 < area.bottom() {
            result.push('\n');
        }
    }
    result
}

/// An [`App`](crate::state::App) backed by a fresh [`MockWallet`].
pub fn mock_app() -> crate::state::App {
    let wallet: std::sync::Arc<dyn WalletProvider> = std::sync::Arc::new(MockWallet::new());
    crate::state::App::new(crate::state::AppConfig::default(), Some(wallet))
}
