//! Confirmation tracking for submitted transactions.
//!
//! Each action that submits a transaction registers a completion handle keyed
//! by the transaction hash. The [`ReceiptWatcher`] polls the wallet for the
//! receipts of every pending hash and fulfils the matching handles exactly
//! once.
//!
//! There is no timeout: a transaction that is never mined keeps its
//! [`PendingConfirmation`] waiting forever. Dropping the pending confirmation
//! (for example when the owning task is aborted at shutdown) removes its
//! handle from the registry, so abandoned waits do not accumulate.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio::time::{MissedTickBehavior, interval};

use super::WalletProvider;
use crate::domain::{TransactionReceipt, TxHash};

/// Default interval between receipt polls.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(4);

type Waiters = HashMap<TxHash, Vec<(u64, oneshot::Sender<TransactionReceipt>)>>;

#[derive(Debug, Default)]
struct RegistryInner {
    waiters: Waiters,
    next_id: u64,
}

// ============================================================================
// Registry
// ============================================================================

/// Completion handles for outstanding transactions, keyed by hash.
#[derive(Debug, Clone, Default)]
pub struct ConfirmationRegistry {
    inner: Arc<Mutex<RegistryInner>>,
}

impl ConfirmationRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, RegistryInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Registers a completion handle for `hash`.
    #[must_use]
    pub fn register(&self, hash: TxHash) -> PendingConfirmation {
        let (tx, rx) = oneshot::channel();
        let mut inner = self.lock();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.waiters.entry(hash).or_default().push((id, tx));
        PendingConfirmation {
            hash,
            id,
            rx,
            registry: self.clone(),
        }
    }

    /// Delivers `receipt` to every handle waiting on its hash.
    ///
    /// Returns the number of handles fulfilled. The entry is removed, so a
    /// second receipt for the same hash fulfils nothing.
    pub fn fulfill(&self, receipt: &TransactionReceipt) -> usize {
        let Some(waiters) = self.lock().waiters.remove(&receipt.transaction_hash) else {
            return 0;
        };
        waiters
            .into_iter()
            .filter(|(_, tx)| !tx.is_closed())
            .map(|(_, tx)| tx.send(receipt.clone()).is_ok())
            .filter(|delivered| *delivered)
            .count()
    }

    /// Hashes that still have at least one live waiter.
    #[must_use]
    pub fn pending_hashes(&self) -> Vec<TxHash> {
        self.lock().waiters.keys().copied().collect()
    }

    /// Number of registered handles across all hashes.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.lock().waiters.values().map(Vec::len).sum()
    }

    fn deregister(&self, hash: &TxHash, id: u64) {
        let mut inner = self.lock();
        if let Some(waiters) = inner.waiters.get_mut(hash) {
            waiters.retain(|(waiter_id, _)| *waiter_id != id);
            if waiters.is_empty() {
                inner.waiters.remove(hash);
            }
        }
    }
}

// ============================================================================
// Pending Confirmation
// ============================================================================

/// A registered wait for one transaction's first confirmation.
#[derive(Debug)]
pub struct PendingConfirmation {
    hash: TxHash,
    id: u64,
    rx: oneshot::Receiver<TransactionReceipt>,
    registry: ConfirmationRegistry,
}

impl PendingConfirmation {
    #[must_use]
    pub fn hash(&self) -> TxHash {
        self.hash
    }

    /// Waits until the receipt arrives. Never fails and never times out.
    pub async fn wait(mut self) -> TransactionReceipt {
        match (&mut self.rx).await {
            Ok(receipt) => receipt,
            // The sender only disappears when the registry is torn down.
            Err(_) => std::future::pending().await,
        }
    }
}

impl Drop for PendingConfirmation {
    fn drop(&mut self) {
        self.registry.deregister(&self.hash, self.id);
    }
}

// ============================================================================
// Receipt Watcher
// ============================================================================

/// Background task feeding mined receipts into a [`ConfirmationRegistry`].
#[derive(Debug)]
pub struct ReceiptWatcher {
    handle: JoinHandle<()>,
}

impl ReceiptWatcher {
    /// Spawns the polling loop on the current tokio runtime.
    #[must_use]
    pub fn spawn(
        registry: ConfirmationRegistry,
        wallet: Arc<dyn WalletProvider>,
        poll_interval: Duration,
    ) -> Self {
        let handle = tokio::spawn(async move {
            let mut ticker = interval(poll_interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                Self::poll_once(&registry, wallet.as_ref()).await;
            }
        });
        Self { handle }
    }

    /// Checks every pending hash once.
    pub async fn poll_once(registry: &ConfirmationRegistry, wallet: &dyn WalletProvider) {
        for hash in registry.pending_hashes() {
            match wallet.transaction_receipt(hash).await {
                Ok(Some(receipt)) => {
                    if !receipt.status {
                        tracing::warn!(%hash, block = receipt.block_number, "transaction mined with failed status");
                    }
                    tracing::info!(%hash, confirmations = receipt.confirmations, "transaction confirmed");
                    registry.fulfill(&receipt);
                }
                Ok(None) => {}
                Err(e) => tracing::debug!(%hash, "receipt poll failed: {e}"),
            }
        }
    }
}

impl Drop for ReceiptWatcher {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::MockWallet;
    use alloy_primitives::B256;

    fn receipt(byte: u8) -> TransactionReceipt {
        TransactionReceipt::new(B256::repeat_byte(byte), 10, true, 10)
    }

    #[tokio::test]
    async fn test_fulfill_resolves_exactly_once() {
        let registry = ConfirmationRegistry::new();
        let pending = registry.register(B256::repeat_byte(1));

        assert_eq!(registry.fulfill(&receipt(1)), 1);
        assert_eq!(registry.fulfill(&receipt(1)), 0);
        assert_eq!(pending.wait().await, receipt(1));
        assert_eq!(registry.pending_count(), 0);
    }

    #[tokio::test]
    async fn test_waits_are_independent_per_hash() {
        let registry = ConfirmationRegistry::new();
        let first = registry.register(B256::repeat_byte(1));
        let mut second = tokio::spawn(registry.register(B256::repeat_byte(2)).wait());

        registry.fulfill(&receipt(1));
        assert_eq!(first.wait().await.transaction_hash, B256::repeat_byte(1));

        tokio::task::yield_now().await;
        assert!(!second.is_finished());
        assert_eq!(registry.pending_hashes(), vec![B256::repeat_byte(2)]);

        registry.fulfill(&receipt(2));
        let resolved = (&mut second).await.unwrap();
        assert_eq!(resolved.transaction_hash, B256::repeat_byte(2));
    }

    #[test]
    fn test_dropped_wait_deregisters() {
        let registry = ConfirmationRegistry::new();
        let kept = registry.register(B256::repeat_byte(1));
        let dropped = registry.register(B256::repeat_byte(1));
        assert_eq!(registry.pending_count(), 2);

        drop(dropped);
        assert_eq!(registry.pending_count(), 1);
        drop(kept);
        assert!(registry.pending_hashes().is_empty());
    }

    #[test]
    fn test_unknown_hash_fulfils_nothing() {
        let registry = ConfirmationRegistry::new();
        assert_eq!(registry.fulfill(&receipt(9)), 0);
    }

    #[tokio::test]
    async fn test_poll_once_fulfils_mined_hashes_only() {
        let wallet = MockWallet::new();
        let registry = ConfirmationRegistry::new();
        let mined = registry.register(B256::repeat_byte(1));
        let _unmined = registry.register(B256::repeat_byte(2));
        wallet.mine(B256::repeat_byte(1));

        ReceiptWatcher::poll_once(&registry, &wallet).await;

        assert_eq!(mined.wait().await.transaction_hash, B256::repeat_byte(1));
        assert_eq!(registry.pending_hashes(), vec![B256::repeat_byte(2)]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_watcher_polls_on_interval_and_stops_on_drop() {
        let wallet = Arc::new(MockWallet::new());
        let registry = ConfirmationRegistry::new();
        let watcher =
            ReceiptWatcher::spawn(registry.clone(), wallet.clone(), DEFAULT_POLL_INTERVAL);

        let hash = B256::repeat_byte(7);
        let mut waiting = tokio::spawn(registry.register(hash).wait());

        // Unmined hashes survive any number of polls.
        tokio::time::sleep(DEFAULT_POLL_INTERVAL * 2).await;
        assert!(!waiting.is_finished());
        assert_eq!(registry.pending_hashes(), vec![hash]);

        wallet.mine(hash);
        tokio::time::sleep(DEFAULT_POLL_INTERVAL).await;
        let receipt = tokio::time::timeout(DEFAULT_POLL_INTERVAL * 2, &mut waiting)
            .await
            .expect("next poll resolves the wait")
            .unwrap();
        assert_eq!(receipt.transaction_hash, hash);
        assert_eq!(registry.pending_count(), 0);

        // The aborted task releases its handle on the wallet.
        drop(watcher);
        for _ in 0..100 {
            if Arc::strong_count(&wallet) == 1 {
                break;
            }
            tokio::task::yield_now().await;
        }
        assert_eq!(Arc::strong_count(&wallet), 1);
    }
}
