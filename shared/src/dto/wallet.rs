use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Wallet snapshot as returned by `GET /wallet/{id}`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Wallet {
    pub id: String,
    pub name: String,
    pub balance: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime<Utc>>,
}

/// Wallet setup request (`POST /setup`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WalletInput {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub balance: Option<f64>,
}

/// Wallet setup response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SetupWalletResponse {
    pub id: String,
    pub name: String,
    pub balance: f64,
    pub transaction_id: String,
    pub date: DateTime<Utc>,
}

impl From<SetupWalletResponse> for Wallet {
    fn from(resp: SetupWalletResponse) -> Self {
        Wallet {
            id: resp.id,
            name: resp.name,
            balance: resp.balance,
            date: Some(resp.date),
        }
    }
}

/// Body of `POST /transact/{walletId}`. `amount` is already signed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TransactRequest {
    pub amount: f64,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TransactResponse {
    pub balance: f64,
    pub transaction_id: String,
}
