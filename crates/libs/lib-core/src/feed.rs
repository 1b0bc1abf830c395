//! # Transaction Feed
//!
//! Binds the wallet service to a [`PaginationController`]: the dependency
//! value is the active wallet plus the sort spec, and the feed is enabled
//! only while a wallet is active.

use async_trait::async_trait;
use shared::{SortSpec, Transaction, TransactionsRequest};
use tracing::info;

use crate::api::WalletApi;
use crate::error::Result;
use crate::notify::Notification;
use crate::pagination::{CancelToken, PageFetcher, PaginationController};

pub const EXPORT_SUCCESS_MESSAGE: &str = "Transactions exported successfully";

/// Dependency value of the feed; any change restarts from page 1.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionQuery {
    pub wallet_id: Option<String>,
    pub sort: SortSpec,
}

impl TransactionQuery {
    pub fn new(wallet_id: Option<String>, sort: SortSpec) -> Self {
        Self { wallet_id, sort }
    }

    pub fn is_enabled(&self) -> bool {
        self.wallet_id.is_some()
    }
}

/// Page-based `GET /transactions`.
pub struct TransactionFetcher<A> {
    api: A,
}

impl<A> TransactionFetcher<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }
}

#[async_trait(?Send)]
impl<A: WalletApi> PageFetcher<Transaction, TransactionQuery> for TransactionFetcher<A> {
    async fn fetch_page(
        &self,
        query: &TransactionQuery,
        page: u32,
        limit: u32,
        cancel: CancelToken,
    ) -> Result<Vec<Transaction>> {
        let Some(wallet_id) = query.wallet_id.clone() else {
            return Ok(Vec::new());
        };

        let request = TransactionsRequest {
            wallet_id,
            skip: page.saturating_sub(1) * limit,
            limit,
            sort_by: query.sort.field,
            sort_order: query.sort.order,
        };
        let page = self.api.get_transactions(&request, Some(cancel)).await?;
        Ok(page.items)
    }
}

pub type TransactionFeed<A> = PaginationController<Transaction, TransactionQuery, TransactionFetcher<A>>;

pub fn transaction_feed<A: WalletApi>(api: A, page_size: u32, query: TransactionQuery) -> TransactionFeed<A> {
    PaginationController::new(TransactionFetcher::new(api), page_size, query)
}

pub fn export_filename(wallet_id: &str) -> String {
    format!("wallet-transactions-{}.csv", wallet_id)
}

/// A finished CSV export, ready to hand to the download mechanism.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvExport {
    pub filename: String,
    pub bytes: Vec<u8>,
}

impl CsvExport {
    pub fn notification(&self) -> Notification {
        Notification::success(EXPORT_SUCCESS_MESSAGE)
    }
}

/// Fetch the CSV for `wallet_id` in the current sort order.
pub async fn export_transactions<A: WalletApi + ?Sized>(
    api: &A,
    wallet_id: &str,
    sort: SortSpec,
) -> Result<CsvExport> {
    let bytes = api.export_transactions(wallet_id, sort).await?;
    info!("Exported {} bytes of transactions for {}", bytes.len(), wallet_id);
    Ok(CsvExport { filename: export_filename(wallet_id), bytes })
}
