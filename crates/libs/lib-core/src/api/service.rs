//! # Service Traits
//!
//! [`WalletApi`] is the seam between the wallet service and everything that
//! consumes it (store, feed, forms), so those can be tested against mocks.

use async_trait::async_trait;
use shared::{
    SetupWalletResponse, SortSpec, TransactResponse, TransactionsPage, TransactionsRequest,
    Wallet, WalletInput,
};

use super::client::ApiClient;
use crate::error::Result;
use crate::pagination::CancelToken;

/// Operations of the wallet service.
#[async_trait(?Send)]
pub trait WalletApi {
    async fn setup(&self, input: &WalletInput) -> Result<SetupWalletResponse>;

    async fn get_wallet(&self, id: &str) -> Result<Wallet>;

    /// `amount` is already signed: negative for debits.
    async fn transact(&self, wallet_id: &str, amount: f64, description: &str) -> Result<TransactResponse>;

    async fn get_transactions(
        &self,
        request: &TransactionsRequest,
        cancel: Option<CancelToken>,
    ) -> Result<TransactionsPage>;

    async fn export_transactions(&self, wallet_id: &str, sort: SortSpec) -> Result<Vec<u8>>;
}

#[async_trait(?Send)]
impl WalletApi for ApiClient {
    async fn setup(&self, input: &WalletInput) -> Result<SetupWalletResponse> {
        super::wallet::setup(self, input).await
    }

    async fn get_wallet(&self, id: &str) -> Result<Wallet> {
        super::wallet::get_wallet(self, id).await
    }

    async fn transact(&self, wallet_id: &str, amount: f64, description: &str) -> Result<TransactResponse> {
        super::wallet::transact(self, wallet_id, amount, description).await
    }

    async fn get_transactions(
        &self,
        request: &TransactionsRequest,
        cancel: Option<CancelToken>,
    ) -> Result<TransactionsPage> {
        super::wallet::get_transactions(self, request, cancel).await
    }

    async fn export_transactions(&self, wallet_id: &str, sort: SortSpec) -> Result<Vec<u8>> {
        super::wallet::export_transactions(self, wallet_id, sort).await
    }
}

#[async_trait(?Send)]
impl<A: WalletApi + ?Sized> WalletApi for std::rc::Rc<A> {
    async fn setup(&self, input: &WalletInput) -> Result<SetupWalletResponse> {
        (**self).setup(input).await
    }

    async fn get_wallet(&self, id: &str) -> Result<Wallet> {
        (**self).get_wallet(id).await
    }

    async fn transact(&self, wallet_id: &str, amount: f64, description: &str) -> Result<TransactResponse> {
        (**self).transact(wallet_id, amount, description).await
    }

    async fn get_transactions(
        &self,
        request: &TransactionsRequest,
        cancel: Option<CancelToken>,
    ) -> Result<TransactionsPage> {
        (**self).get_transactions(request, cancel).await
    }

    async fn export_transactions(&self, wallet_id: &str, sort: SortSpec) -> Result<Vec<u8>> {
        (**self).export_transactions(wallet_id, sort).await
    }
}
