//! # Wallet Endpoints
//!
//! Setup, lookup, transact, transaction listing and CSV export.

use shared::{
    ExportRequest, SetupWalletResponse, SortSpec, TransactRequest, TransactResponse,
    TransactionsPage, TransactionsRequest, Wallet, WalletInput,
};

use super::client::ApiClient;
use super::validator::WalletValidator;
use crate::error::Result;
use crate::pagination::CancelToken;

pub const CSV_CONTENT_TYPE: &str = "text/csv";

/// `{prefix}/{id}` with the id as a single encoded path segment.
fn wallet_path(prefix: &str, id: &str) -> String {
    format!("{}/{}", prefix, urlencoding::encode(id))
}

/// `POST /setup`
pub async fn setup(client: &ApiClient, input: &WalletInput) -> Result<SetupWalletResponse> {
    client.post("/setup", input, None, None).await
}

/// `GET /wallet/{id}`
pub async fn get_wallet(client: &ApiClient, id: &str) -> Result<Wallet> {
    client
        .get::<Wallet, ()>(&wallet_path("/wallet", id), None, Some(&WalletValidator), None)
        .await
}

/// `POST /transact/{walletId}` with a signed amount.
pub async fn transact(
    client: &ApiClient,
    wallet_id: &str,
    amount: f64,
    description: &str,
) -> Result<TransactResponse> {
    let body = TransactRequest { amount, description: description.to_string() };
    client
        .post(&wallet_path("/transact", wallet_id), &body, None, None)
        .await
}

/// `GET /transactions`, cancellable.
pub async fn get_transactions(
    client: &ApiClient,
    request: &TransactionsRequest,
    cancel: Option<CancelToken>,
) -> Result<TransactionsPage> {
    client
        .get::<TransactionsPage, _>("/transactions", Some(request), None, cancel)
        .await
}

/// `GET /transactions/export` as CSV bytes.
pub async fn export_transactions(client: &ApiClient, wallet_id: &str, sort: SortSpec) -> Result<Vec<u8>> {
    let query = ExportRequest {
        wallet_id: wallet_id.to_string(),
        sort_by: sort.field,
        sort_order: sort.order,
    };
    client
        .get_bytes("/transactions/export", &query, CSV_CONTENT_TYPE)
        .await
}
