//! Application constants

use lib_core::config::{ClientConfig, DEFAULT_API_BASE_URL};

/// Wallet service base URL, fixed at build time via `WALLET_API_BASE_URL`.
pub const API_BASE: &str = match option_env!("WALLET_API_BASE_URL") {
    Some(url) => url,
    None => DEFAULT_API_BASE_URL,
};

pub const APP_TITLE: &str = "Wallet App";

pub const WALLET_PATH: &str = "/wallet";
pub const TRANSACTIONS_PATH: &str = "/transactions";

/// (path, label) of the navigation links
pub const NAV_LINKS: &[(&str, &str)] = &[(WALLET_PATH, "Wallet"), (TRANSACTIONS_PATH, "Transactions")];

// Toast lifetimes
pub const SUCCESS_TOAST_MS: u32 = 4000;
pub const ERROR_TOAST_MS: u32 = 5000;

/// Client configuration for the browser build.
pub fn client_config() -> ClientConfig {
    ClientConfig::default().with_api_base_url(API_BASE)
}
