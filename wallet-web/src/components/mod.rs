//! UI Components

pub mod export_button;
pub mod navbar;
pub mod shimmer;
pub mod toaster;
pub mod transaction_form;
pub mod transaction_sort;
pub mod transaction_table;
pub mod transaction_type_button;
pub mod wallet_dashboard;
pub mod wallet_setup_form;

pub use export_button::ExportButton;
pub use navbar::Navbar;
pub use shimmer::{Shimmer, TransactionListSkeleton, WalletBalanceSkeleton, WalletTransactionFormSkeleton};
pub use toaster::Toaster;
pub use transaction_form::TransactionForm;
pub use transaction_sort::TransactionSort;
pub use transaction_table::TransactionTable;
pub use transaction_type_button::TransactionTypeButton;
pub use wallet_dashboard::WalletDashboard;
pub use wallet_setup_form::WalletSetupForm;
