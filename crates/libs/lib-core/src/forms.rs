//! # Form Validation and Submission
//!
//! Raw text from the setup and transaction forms is validated into typed
//! inputs before anything reaches the API. Field messages match what the
//! forms display under each input.

use std::fmt;

use lib_utils::validation::{
    validate_max_length, validate_min_amount, validate_non_negative, validate_not_empty,
};
use shared::{SetupWalletResponse, TransactResponse, TransactionType, WalletInput};

use crate::api::WalletApi;
use crate::error::Result;

/// Smallest amount a transaction may move; also the amount input's step.
pub const MIN_AMOUNT: f64 = 0.0001;
pub const MAX_DESCRIPTION_LEN: usize = 100;

pub const TRANSACTION_SUCCESS_MESSAGE: &str = "Transaction completed successfully";
pub const SETUP_FAILED_MESSAGE: &str = "Failed to create wallet. Please try again.";
pub const TRANSACTION_FAILED_MESSAGE: &str = "Transaction failed. Please try again.";

/// Per-field validation messages, in field order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormError {
    pub fields: Vec<(&'static str, String)>,
}

impl FormError {
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(field, _)| *field == name)
            .map(|(_, message)| message.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    fn check(&mut self, field: &'static str, outcome: std::result::Result<(), String>) {
        if let Err(message) = outcome {
            self.fields.push((field, message));
        }
    }

    fn into_result<T>(self, value: T) -> std::result::Result<T, FormError> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<&str> = self.fields.iter().map(|(_, m)| m.as_str()).collect();
        write!(f, "{}", messages.join("; "))
    }
}

impl std::error::Error for FormError {}

/// Raw values of the wallet setup form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WalletForm {
    pub name: String,
    /// Optional; blank means zero
    pub balance: String,
}

impl WalletForm {
    pub fn validate(&self) -> std::result::Result<WalletInput, FormError> {
        let mut errors = FormError::default();
        let name = self.name.trim();
        errors.check("name", validate_not_empty(name, "Wallet name"));

        let balance = match self.balance.trim() {
            "" => 0.0,
            raw => raw.parse::<f64>().unwrap_or(f64::NAN),
        };
        errors.check("balance", validate_non_negative(balance, "Balance"));

        errors.into_result(WalletInput { name: name.to_string(), balance: Some(balance) })
    }
}

/// A validated transaction; `amount` is always positive.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionInput {
    pub amount: f64,
    pub description: String,
    pub kind: TransactionType,
}

impl TransactionInput {
    /// Amount as sent to the API: negative for debits.
    pub fn signed_amount(&self) -> f64 {
        self.kind.signed_amount(self.amount)
    }
}

/// Raw values of the transaction form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionForm {
    pub amount: String,
    pub description: String,
    pub kind: TransactionType,
}

impl Default for TransactionForm {
    fn default() -> Self {
        Self {
            amount: MIN_AMOUNT.to_string(),
            description: String::new(),
            kind: TransactionType::Credit,
        }
    }
}

impl TransactionForm {
    pub fn validate(&self) -> std::result::Result<TransactionInput, FormError> {
        let mut errors = FormError::default();

        let amount = match self.amount.trim() {
            "" => None,
            raw => Some(raw.parse::<f64>().unwrap_or(f64::NAN)),
        };
        match amount {
            None => errors.check("amount", Err("Amount is required".to_string())),
            Some(value) => errors.check("amount", validate_min_amount(value, MIN_AMOUNT, "Amount")),
        }

        let description = self.description.trim();
        errors.check(
            "description",
            validate_not_empty(description, "Description")
                .and_then(|_| validate_max_length(description, MAX_DESCRIPTION_LEN, "Description")),
        );

        errors.into_result(TransactionInput {
            amount: amount.unwrap_or_default(),
            description: description.to_string(),
            kind: self.kind,
        })
    }
}

/// Create a wallet.
pub async fn submit_setup<A: WalletApi + ?Sized>(api: &A, input: &WalletInput) -> Result<SetupWalletResponse> {
    api.setup(input).await
}

/// Record a transaction against `wallet_id`, signing the amount by type.
pub async fn submit_transaction<A: WalletApi + ?Sized>(
    api: &A,
    wallet_id: &str,
    input: &TransactionInput,
) -> Result<TransactResponse> {
    api.transact(wallet_id, input.signed_amount(), &input.description).await
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use async_trait::async_trait;
    use chrono::Utc;
    use shared::{SortSpec, TransactionsPage, TransactionsRequest, Wallet};

    use super::*;
    use crate::error::ApiError;
    use crate::pagination::CancelToken;

    #[derive(Default)]
    struct RecordingApi {
        transacts: RefCell<Vec<(String, f64, String)>>,
        setups: RefCell<Vec<WalletInput>>,
    }

    #[async_trait(?Send)]
    impl WalletApi for RecordingApi {
        async fn setup(&self, input: &WalletInput) -> Result<SetupWalletResponse> {
            self.setups.borrow_mut().push(input.clone());
            Ok(SetupWalletResponse {
                id: "w1".to_string(),
                name: input.name.clone(),
                balance: input.balance.unwrap_or_default(),
                transaction_id: "t0".to_string(),
                date: Utc::now(),
            })
        }

        async fn get_wallet(&self, _id: &str) -> Result<Wallet> {
            Err(ApiError::Network("unused".to_string()))
        }

        async fn transact(&self, wallet_id: &str, amount: f64, description: &str) -> Result<TransactResponse> {
            self.transacts
                .borrow_mut()
                .push((wallet_id.to_string(), amount, description.to_string()));
            Ok(TransactResponse { balance: 10.0 + amount, transaction_id: "t1".to_string() })
        }

        async fn get_transactions(
            &self,
            _request: &TransactionsRequest,
            _cancel: Option<CancelToken>,
        ) -> Result<TransactionsPage> {
            Err(ApiError::Network("unused".to_string()))
        }

        async fn export_transactions(&self, _wallet_id: &str, _sort: SortSpec) -> Result<Vec<u8>> {
            Err(ApiError::Network("unused".to_string()))
        }
    }

    fn transaction_form(amount: &str, description: &str, kind: TransactionType) -> TransactionForm {
        TransactionForm { amount: amount.to_string(), description: description.to_string(), kind }
    }

    #[tokio::test]
    async fn test_debit_is_sent_negative() {
        let api = RecordingApi::default();
        let input = transaction_form("5", "groceries", TransactionType::Debit).validate().unwrap();

        let response = submit_transaction(&api, "w1", &input).await.unwrap();

        assert_eq!(
            *api.transacts.borrow(),
            vec![("w1".to_string(), -5.0, "groceries".to_string())]
        );
        assert_eq!(response.balance, 5.0);
    }

    #[tokio::test]
    async fn test_setup_defaults_blank_balance_to_zero() {
        let api = RecordingApi::default();
        let input = WalletForm { name: " alice ".to_string(), balance: String::new() }
            .validate()
            .unwrap();
        let created = submit_setup(&api, &input).await.unwrap();

        assert_eq!(created.name, "alice");
        assert_eq!(api.setups.borrow()[0].balance, Some(0.0));
    }

    #[test]
    fn test_wallet_form_errors() {
        let err = WalletForm { name: "  ".to_string(), balance: "-3".to_string() }
            .validate()
            .unwrap_err();
        assert_eq!(err.field("name"), Some("Wallet name is required"));
        assert_eq!(err.field("balance"), Some("Balance cannot be negative"));
    }

    #[test]
    fn test_transaction_amount_rules() {
        let below = transaction_form("0.00001", "x", TransactionType::Credit).validate().unwrap_err();
        assert_eq!(below.field("amount"), Some("Amount must be at least 0.0001"));

        let garbage = transaction_form("abc", "x", TransactionType::Credit).validate().unwrap_err();
        assert_eq!(garbage.field("amount"), Some("Please enter a valid amount"));

        let blank = transaction_form("", "x", TransactionType::Credit).validate().unwrap_err();
        assert_eq!(blank.field("amount"), Some("Amount is required"));

        assert!(transaction_form("0.0001", "x", TransactionType::Credit).validate().is_ok());
    }

    #[test]
    fn test_description_rules() {
        let empty = transaction_form("1", "", TransactionType::Credit).validate().unwrap_err();
        assert_eq!(empty.field("description"), Some("Description is required"));

        let long = "x".repeat(MAX_DESCRIPTION_LEN + 1);
        let err = transaction_form("1", &long, TransactionType::Credit).validate().unwrap_err();
        assert_eq!(err.field("description"), Some("Description must be less than 100 characters"));

        let exact = "x".repeat(MAX_DESCRIPTION_LEN);
        assert!(transaction_form("1", &exact, TransactionType::Credit).validate().is_ok());
    }

    #[test]
    fn test_default_transaction_form_is_valid_credit() {
        let input = TransactionForm { description: "salary".to_string(), ..TransactionForm::default() }
            .validate()
            .unwrap();
        assert_eq!(input.amount, MIN_AMOUNT);
        assert_eq!(input.signed_amount(), MIN_AMOUNT);
    }
}
