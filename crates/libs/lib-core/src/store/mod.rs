//! Client-side state that outlives a single view.

pub mod storage;
pub mod wallet;

pub use storage::{KeyValueStore, MemoryStorage};
pub use wallet::{WalletState, WalletStore, LOAD_WALLET_ERROR};
