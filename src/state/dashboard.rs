//! The contract dashboard view-model.
//!
//! [`Dashboard`] owns the displayed balance and exposes the four user
//! actions. Every action first checks that a wallet is present; without one
//! it emits a single warning and does nothing else.
//!
//! Actions are independent: the dashboard is cheap to clone, each action
//! is meant to run in its own task, and nothing prevents two actions (even two
//! identical ones) from being in flight at once.

use std::sync::Arc;

use alloy_primitives::Address;
use tokio::sync::{mpsc, watch};

use crate::client::{ConfirmationRegistry, ContractHandle, Signer, WalletProvider};
use crate::domain::{
    DashboardError, INITIAL_BALANCE, Notification, TransactionReceipt, TransactionRequest,
    format_ether, parse_fund_amount,
};

/// Warning shown when an action is attempted without a wallet.
pub const WALLET_MISSING_MESSAGE: &str = "Please install a wallet";

/// Info shown when a withdrawal starts.
pub const WITHDRAWING_MESSAGE: &str = "Withdrawing...";

/// Success shown once a transaction has its first confirmation.
pub const DONE_MESSAGE: &str = "Done!";

// ============================================================================
// Balance Cell
// ============================================================================

/// Holds the displayed balance.
///
/// Readers may clone or subscribe freely; only [`Dashboard::refresh_balance`]
/// writes. Concurrent refreshes are not deduplicated: the last write wins.
#[derive(Debug, Clone)]
pub struct BalanceCell {
    tx: Arc<watch::Sender<String>>,
}

impl BalanceCell {
    #[must_use]
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(INITIAL_BALANCE.to_string());
        Self { tx: Arc::new(tx) }
    }

    /// Current displayed balance in ether.
    #[must_use]
    pub fn get(&self) -> String {
        self.tx.borrow().clone()
    }

    /// Receiver that observes every subsequent update.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<String> {
        self.tx.subscribe()
    }

    fn set(&self, value: String) {
        self.tx.send_replace(value);
    }
}

impl Default for BalanceCell {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Dashboard
// ============================================================================

/// View-model for the funding contract.
#[derive(Debug, Clone)]
pub struct Dashboard {
    wallet: Option<Arc<dyn WalletProvider>>,
    contract_address: Address,
    balance: BalanceCell,
    notifications: mpsc::UnboundedSender<Notification>,
    confirmations: ConfirmationRegistry,
}

impl Dashboard {
    /// Creates a dashboard. `wallet` is `None` when no wallet is available.
    #[must_use]
    pub fn new(
        wallet: Option<Arc<dyn WalletProvider>>,
        contract_address: Address,
        notifications: mpsc::UnboundedSender<Notification>,
    ) -> Self {
        Self {
            wallet,
            contract_address,
            balance: BalanceCell::new(),
            notifications,
            confirmations: ConfirmationRegistry::new(),
        }
    }

    #[must_use]
    pub fn balance(&self) -> &BalanceCell {
        &self.balance
    }

    #[must_use]
    pub fn confirmations(&self) -> &ConfirmationRegistry {
        &self.confirmations
    }

    #[must_use]
    pub fn contract_address(&self) -> Address {
        self.contract_address
    }

    #[must_use]
    pub fn wallet(&self) -> Option<&Arc<dyn WalletProvider>> {
        self.wallet.as_ref()
    }

    // ========================================================================
    // Actions
    // ========================================================================

    /// Requests account access from the wallet.
    ///
    /// # Errors
    ///
    /// Wallet failures (including the user rejecting the request) are returned
    /// unchanged rather than turned into notifications.
    pub async fn connect(&self) -> Result<(), DashboardError> {
        let Some(wallet) = self.wallet_or_warn() else {
            return Ok(());
        };
        let accounts = wallet.request_accounts().await?;
        tracing::info!(accounts = accounts.len(), "wallet connected");
        Ok(())
    }

    /// Queries the contract's native balance and stores it formatted in ether.
    ///
    /// # Errors
    ///
    /// Wallet failures are returned unchanged; the displayed balance is left
    /// as it was.
    pub async fn refresh_balance(&self) -> Result<(), DashboardError> {
        let Some(wallet) = self.wallet_or_warn() else {
            return Ok(());
        };
        let wei = wallet.get_balance(self.contract_address).await?;
        let formatted = format_ether(wei);
        tracing::debug!(%wei, balance = %formatted, "balance refreshed");
        self.balance.set(formatted);
        Ok(())
    }

    /// Sends `fund_amount` ether to the contract's `fund()` method and waits
    /// for the first confirmation.
    ///
    /// Any failure, including an unparsable amount, becomes an error
    /// notification.
    pub async fn fund(&self, fund_amount: &str) {
        let Some(wallet) = self.wallet_or_warn() else {
            return;
        };
        let outcome = self.try_fund(wallet, fund_amount).await;
        self.report(outcome);
    }

    /// Calls the contract's `withdraw()` method and waits for the first
    /// confirmation. Whether the caller may withdraw is decided by the
    /// contract alone.
    pub async fn withdraw(&self) {
        let Some(wallet) = self.wallet_or_warn() else {
            return;
        };
        self.notify(Notification::info(WITHDRAWING_MESSAGE));
        let outcome = self.try_withdraw(wallet).await;
        self.report(outcome);
    }

    // ========================================================================
    // Internals
    // ========================================================================

    async fn try_fund(
        &self,
        wallet: Arc<dyn WalletProvider>,
        fund_amount: &str,
    ) -> Result<TransactionReceipt, DashboardError> {
        let value = parse_fund_amount(fund_amount)?;
        let contract = self.signed_contract(wallet).await?;
        let request = contract.fund(value).await?;
        Ok(self.await_confirmation(&request).await)
    }

    async fn try_withdraw(
        &self,
        wallet: Arc<dyn WalletProvider>,
    ) -> Result<TransactionReceipt, DashboardError> {
        let contract = self.signed_contract(wallet).await?;
        let request = contract.withdraw().await?;
        Ok(self.await_confirmation(&request).await)
    }

    async fn signed_contract(
        &self,
        wallet: Arc<dyn WalletProvider>,
    ) -> Result<ContractHandle, DashboardError> {
        let signer = Signer::from_wallet(wallet).await?;
        Ok(ContractHandle::new(self.contract_address, signer))
    }

    /// Waits for the first receipt of `request`. Never fails; waits forever
    /// if the transaction is never mined.
    async fn await_confirmation(&self, request: &TransactionRequest) -> TransactionReceipt {
        let pending = self.confirmations.register(request.hash);
        tracing::debug!(hash = %pending.hash(), "waiting for confirmation");
        pending.wait().await
    }

    fn report(&self, outcome: Result<TransactionReceipt, DashboardError>) {
        match outcome {
            Ok(_) => self.notify(Notification::success(DONE_MESSAGE)),
            Err(e) if e.is_user_rejection() => {
                tracing::info!("request rejected in wallet: {e}");
                self.notify(Notification::error(&e));
            }
            Err(e) => {
                tracing::warn!("action failed: {e}");
                self.notify(Notification::error(&e));
            }
        }
    }

    fn wallet_or_warn(&self) -> Option<Arc<dyn WalletProvider>> {
        if self.wallet.is_none() {
            self.notify(Notification::warning(WALLET_MISSING_MESSAGE));
        }
        self.wallet.clone()
    }

    fn notify(&self, notification: Notification) {
        // Receiver may be dropped during shutdown - safe to ignore
        let _ = self.notifications.send(notification);
    }
}
