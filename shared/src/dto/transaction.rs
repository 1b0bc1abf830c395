use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Direction of a wallet transaction
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionType {
    #[default]
    Credit,
    Debit,
}

impl TransactionType {
    pub fn label(&self) -> &'static str {
        match self {
            TransactionType::Credit => "Credit",
            TransactionType::Debit => "Debit",
        }
    }

    /// Sign a positive user-entered amount: debits are sent negative.
    pub fn signed_amount(&self, amount: f64) -> f64 {
        match self {
            TransactionType::Credit => amount,
            TransactionType::Debit => -amount,
        }
    }
}

/// A recorded transaction. Immutable once fetched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub wallet_id: String,
    pub amount: f64,
    pub description: String,
    /// Wallet balance after this transaction
    pub balance: f64,
    pub date: DateTime<Utc>,
    #[serde(rename = "type")]
    pub kind: TransactionType,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMetadata {
    pub total: u64,
    pub page: u32,
    pub limit: u32,
    pub has_more: bool,
}

/// `data` payload of `GET /transactions`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TransactionsPage {
    pub items: Vec<Transaction>,
    pub metadata: PaginationMetadata,
}

// ==================== SORTING ====================

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    #[default]
    Date,
    Amount,
}

impl SortField {
    pub const ALL: [SortField; 2] = [SortField::Date, SortField::Amount];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Date => "date",
            SortField::Amount => "amount",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortField::Date => "Date",
            SortField::Amount => "Amount",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.as_str() == value)
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }
}

/// Sort field plus direction. Defaults to newest first.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct SortSpec {
    pub field: SortField,
    pub order: SortOrder,
}

impl SortSpec {
    pub fn new(field: SortField, order: SortOrder) -> Self {
        Self { field, order }
    }
}

/// Query string of `GET /transactions`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TransactionsRequest {
    pub wallet_id: String,
    pub skip: u32,
    pub limit: u32,
    pub sort_by: SortField,
    pub sort_order: SortOrder,
}

/// Query string of `GET /transactions/export`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ExportRequest {
    pub wallet_id: String,
    pub sort_by: SortField,
    pub sort_order: SortOrder,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transaction_wire_format() {
        let tx: Transaction = serde_json::from_str(
            r#"{"id":"t1","walletId":"w1","amount":-5,"description":"coffee","balance":5,"date":"2024-03-01T10:00:00Z","type":"DEBIT"}"#,
        )
        .unwrap();
        assert_eq!(tx.kind, TransactionType::Debit);
        assert_eq!(tx.wallet_id, "w1");
        assert_eq!(tx.amount, -5.0);
    }

    #[test]
    fn test_signed_amount() {
        assert_eq!(TransactionType::Debit.signed_amount(5.0), -5.0);
        assert_eq!(TransactionType::Credit.signed_amount(5.0), 5.0);
    }

    #[test]
    fn test_sort_defaults_and_toggle() {
        let spec = SortSpec::default();
        assert_eq!(spec.field, SortField::Date);
        assert_eq!(spec.order, SortOrder::Desc);
        assert_eq!(spec.order.toggled(), SortOrder::Asc);
        assert_eq!(SortField::parse("amount"), Some(SortField::Amount));
        assert_eq!(SortField::parse("balance"), None);
    }

    #[test]
    fn test_transactions_request_serializes_camel_case() {
        let req = TransactionsRequest {
            wallet_id: "w1".to_string(),
            skip: 10,
            limit: 10,
            sort_by: SortField::Amount,
            sort_order: SortOrder::Asc,
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["walletId"], "w1");
        assert_eq!(json["sortBy"], "amount");
        assert_eq!(json["sortOrder"], "asc");
    }
}
