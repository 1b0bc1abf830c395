//! # Wallet State Store
//!
//! Holds the active wallet id and its latest snapshot. The id is persisted
//! under a single storage key so the active wallet survives reloads.
//!
//! Invariant: `wallet_id.is_some()` does not imply `wallet.is_some()`. The
//! snapshot may still be loading, and a failed load rolls the id back.

use std::cell::{Cell, RefCell};

use shared::Wallet;
use tracing::{debug, info, warn};

use super::storage::KeyValueStore;
use crate::api::WalletApi;
use crate::error::ApiError;

/// Error surfaced when a wallet cannot be loaded.
pub const LOAD_WALLET_ERROR: &str = "Failed to load wallet";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct WalletState {
    pub wallet_id: Option<String>,
    pub wallet: Option<Wallet>,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl WalletState {
    /// The snapshot, once loaded and not being reloaded.
    pub fn ready_wallet(&self) -> Option<&Wallet> {
        if self.is_loading {
            None
        } else {
            self.wallet.as_ref()
        }
    }
}

type Observer = Box<dyn Fn(&WalletState)>;

/// Single-threaded store; share it behind an `Rc`.
pub struct WalletStore<A, S> {
    api: A,
    storage: S,
    storage_key: String,
    state: RefCell<WalletState>,
    load_seq: Cell<u64>,
    torn_down: Cell<bool>,
    observer: RefCell<Option<Observer>>,
}

impl<A, S> WalletStore<A, S>
where
    A: WalletApi,
    S: KeyValueStore,
{
    /// Read the persisted id. Call [`init`](Self::init) to load its snapshot.
    pub fn new(api: A, storage: S, storage_key: impl Into<String>) -> Self {
        let storage_key = storage_key.into();
        let wallet_id = storage.get(&storage_key).filter(|id| !id.trim().is_empty());

        Self {
            api,
            storage,
            storage_key,
            state: RefCell::new(WalletState {
                is_loading: wallet_id.is_some(),
                wallet_id,
                wallet: None,
                error: None,
            }),
            load_seq: Cell::new(0),
            torn_down: Cell::new(false),
            observer: RefCell::new(None),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn subscribe(&self, observer: impl Fn(&WalletState) + 'static) {
        *self.observer.borrow_mut() = Some(Box::new(observer));
    }

    pub fn snapshot(&self) -> WalletState {
        self.state.borrow().clone()
    }

    pub fn wallet_id(&self) -> Option<String> {
        self.state.borrow().wallet_id.clone()
    }

    /// Load the persisted wallet, if any. Returns whether a wallet is active
    /// afterwards.
    pub async fn init(&self) -> bool {
        match self.wallet_id() {
            Some(id) => {
                debug!("Restoring wallet {}", id);
                self.load(&id).await
            }
            None => false,
        }
    }

    /// Make `id` the active wallet and load it. On failure the store falls
    /// back to "no wallet" with [`LOAD_WALLET_ERROR`] set.
    pub async fn set_wallet_id(&self, id: &str) -> bool {
        if self.torn_down.get() {
            return false;
        }
        self.state.borrow_mut().wallet_id = Some(id.to_string());
        if let Err(e) = self.storage.set(&self.storage_key, id) {
            warn!("Could not persist wallet id: {}", e);
        }
        self.load(id).await
    }

    /// Reload the active wallet's snapshot, e.g. after a transaction.
    pub async fn reload(&self) -> bool {
        match self.wallet_id() {
            Some(id) => self.set_wallet_id(&id).await,
            None => false,
        }
    }

    /// Forget the active wallet. Idempotent.
    pub fn clear_wallet(&self) {
        if self.torn_down.get() {
            return;
        }
        self.bump_seq();
        *self.state.borrow_mut() = WalletState::default();
        self.forget_persisted();
        info!("Wallet cleared");
        self.notify();
    }

    /// Detach the observer and ignore any load still in flight. The persisted
    /// id is kept for the next session.
    pub fn teardown(&self) {
        self.torn_down.set(true);
        self.bump_seq();
        self.observer.borrow_mut().take();
    }

    async fn load(&self, id: &str) -> bool {
        let seq = self.bump_seq();
        {
            let mut state = self.state.borrow_mut();
            state.is_loading = true;
            state.error = None;
        }
        self.notify();

        let result = self.api.get_wallet(id).await;
        if self.torn_down.get() || seq != self.load_seq.get() {
            debug!("Ignoring stale load of wallet {}", id);
            return false;
        }

        let loaded = match result {
            Ok(wallet) => {
                let mut state = self.state.borrow_mut();
                state.wallet = Some(wallet);
                state.is_loading = false;
                state.error = None;
                true
            }
            Err(ApiError::Cancelled) => {
                self.state.borrow_mut().is_loading = false;
                false
            }
            Err(e) => {
                warn!("Failed to load wallet {}: {}", id, e);
                *self.state.borrow_mut() = WalletState {
                    error: Some(LOAD_WALLET_ERROR.to_string()),
                    ..WalletState::default()
                };
                self.forget_persisted();
                false
            }
        };

        self.notify();
        loaded
    }

    fn bump_seq(&self) -> u64 {
        let seq = self.load_seq.get() + 1;
        self.load_seq.set(seq);
        seq
    }

    fn forget_persisted(&self) {
        if let Err(e) = self.storage.remove(&self.storage_key) {
            warn!("Could not clear persisted wallet id: {}", e);
        }
    }

    fn notify(&self) {
        if self.torn_down.get() {
            return;
        }
        let snapshot = self.state.borrow().clone();
        if let Some(observer) = self.observer.borrow().as_ref() {
            observer(&snapshot);
        }
    }
}
