//! # Formatting Utilities for Wallet Web
//!
//! Display formatting for balances, transaction amounts and dates. The number
//! grouping itself lives in [`shared::utils`].

use chrono::{DateTime, Utc};
use shared::utils::{format_amount, format_signed_amount};

/// Decimal places shown for every amount
pub const AMOUNT_DECIMALS: usize = 4;

/// Wallet balance as shown on the dashboard, e.g. `$1,234.5000`.
pub fn format_balance(balance: f64) -> String {
    let amount = format_amount(balance, AMOUNT_DECIMALS);
    match amount.strip_prefix('-') {
        Some(magnitude) => format!("-${}", magnitude),
        None => format!("${}", amount),
    }
}

/// Signed transaction amount: `+5.0000` or `-5.0000`.
pub fn format_transaction_amount(amount: f64) -> String {
    format_signed_amount(amount, AMOUNT_DECIMALS)
}

/// Running balance column.
pub fn format_running_balance(balance: f64) -> String {
    format_amount(balance, AMOUNT_DECIMALS)
}

pub fn format_transaction_date(date: &DateTime<Utc>) -> String {
    lib_utils::time::format_date(date)
}

/// CSS class for an amount cell.
pub fn amount_class(amount: f64) -> &'static str {
    if amount >= 0.0 {
        "amount-credit"
    } else {
        "amount-debit"
    }
}
