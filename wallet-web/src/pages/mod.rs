//! Routed pages

pub mod transactions;
pub mod wallet;

pub use transactions::TransactionsPage;
pub use wallet::WalletPage;
