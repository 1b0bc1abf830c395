//! Response-shape validation.
//!
//! The transport layer hands the raw envelope `data` to a [`Validator`];
//! when a caller supplies none, the payload is only decoded with serde.

use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde_json::Value;
use shared::Wallet;

use crate::error::ValidationFailure;

/// Turns a raw JSON payload into `T` or a [`ValidationFailure`].
pub trait Validator<T> {
    fn validate(&self, raw: Value) -> Result<T, ValidationFailure>;
}

impl<T, F> Validator<T> for F
where
    F: Fn(Value) -> Result<T, ValidationFailure>,
{
    fn validate(&self, raw: Value) -> Result<T, ValidationFailure> {
        self(raw)
    }
}

/// Shape check only: the payload must decode into `T`.
pub struct SchemaValidator<T>(PhantomData<fn() -> T>);

impl<T> SchemaValidator<T> {
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> Default for SchemaValidator<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: DeserializeOwned> Validator<T> for SchemaValidator<T> {
    fn validate(&self, raw: Value) -> Result<T, ValidationFailure> {
        decode(raw)
    }
}

/// Wallet snapshot: decodes and requires a non-empty name and finite balance.
#[derive(Debug, Default, Clone, Copy)]
pub struct WalletValidator;

impl Validator<Wallet> for WalletValidator {
    fn validate(&self, raw: Value) -> Result<Wallet, ValidationFailure> {
        let wallet: Wallet = decode(raw)?;
        if wallet.name.is_empty() {
            return Err(ValidationFailure::new("wallet name must not be empty"));
        }
        if !wallet.balance.is_finite() {
            return Err(ValidationFailure::new("wallet balance must be a number"));
        }
        Ok(wallet)
    }
}

pub(crate) fn decode<T: DeserializeOwned>(raw: Value) -> Result<T, ValidationFailure> {
    serde_json::from_value(raw).map_err(ValidationFailure::from)
}
