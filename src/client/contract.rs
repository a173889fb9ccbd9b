//! Signer-bound handle to the funding contract.

use std::sync::Arc;

use alloy_primitives::{Address, U256};

use super::WalletProvider;
use crate::domain::{
    DashboardError, TransactionParams, TransactionRequest, fund_calldata, withdraw_calldata,
};

/// An authorized wallet account able to submit state-changing calls.
#[derive(Debug, Clone)]
pub struct Signer {
    wallet: Arc<dyn WalletProvider>,
    account: Address,
}

impl Signer {
    /// Binds to the first account the wallet has authorized.
    ///
    /// # Errors
    ///
    /// Returns `DashboardError::NoAccount` if the wallet has not authorized
    /// any account yet, or the wallet's own error if the lookup fails.
    pub async fn from_wallet(wallet: Arc<dyn WalletProvider>) -> Result<Self, DashboardError> {
        let account = wallet
            .accounts()
            .await?
            .first()
            .copied()
            .ok_or(DashboardError::NoAccount)?;
        Ok(Self { wallet, account })
    }

    #[must_use]
    pub fn account(&self) -> Address {
        self.account
    }
}

/// The funding contract bound to a signer.
///
/// Handles are cheap and are created fresh for every action.
#[derive(Debug, Clone)]
pub struct ContractHandle {
    address: Address,
    signer: Signer,
}

impl ContractHandle {
    #[must_use]
    pub fn new(address: Address, signer: Signer) -> Self {
        Self { address, signer }
    }

    /// Calls `fund()` with `value` wei attached.
    ///
    /// # Errors
    ///
    /// Returns whatever the wallet reports when it refuses the transaction.
    pub async fn fund(&self, value: U256) -> Result<TransactionRequest, DashboardError> {
        self.submit(fund_calldata(), value).await
    }

    /// Calls `withdraw()`.
    ///
    /// # Errors
    ///
    /// Returns whatever the wallet reports when it refuses the transaction,
    /// including reverts from callers that are not the owner.
    pub async fn withdraw(&self) -> Result<TransactionRequest, DashboardError> {
        self.submit(withdraw_calldata(), U256::ZERO).await
    }

    async fn submit(
        &self,
        data: alloy_primitives::Bytes,
        value: U256,
    ) -> Result<TransactionRequest, DashboardError> {
        let params = TransactionParams {
            from: self.signer.account,
            to: self.address,
            data,
            value,
        };
        let hash = self.signer.wallet.send_transaction(params).await?;
        tracing::info!(%hash, contract = %self.address, %value, "transaction submitted");
        Ok(TransactionRequest { hash })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::MockWallet;

    #[tokio::test]
    async fn test_signer_requires_authorized_account() {
        let wallet = Arc::new(MockWallet::new().without_accounts());
        let err = Signer::from_wallet(wallet).await.unwrap_err();
        assert!(matches!(err, DashboardError::NoAccount));
    }

    #[tokio::test]
    async fn test_fund_and_withdraw_calls() {
        let mock = Arc::new(MockWallet::new());
        let signer = Signer::from_wallet(mock.clone()).await.unwrap();
        assert_eq!(signer.account(), MockWallet::ACCOUNT);

        let contract = ContractHandle::new(Address::repeat_byte(0x42), signer);
        let first = contract.fund(U256::from(7u8)).await.unwrap();
        let second = contract.withdraw().await.unwrap();
        assert_ne!(first.hash, second.hash);

        let sent = mock.sent_transactions();
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[0].to, Address::repeat_byte(0x42));
        assert_eq!(sent[0].from, MockWallet::ACCOUNT);
        assert_eq!(sent[0].value, U256::from(7u8));
        assert_eq!(sent[0].data, fund_calldata());
        assert_eq!(sent[1].value, U256::ZERO);
        assert_eq!(sent[1].data, withdraw_calldata());
    }
}
