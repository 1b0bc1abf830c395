//! Wallet state management
//!
//! Wraps the core [`WalletStore`] in a reactive context: the store pushes
//! every state change into a signal, and actions spawn the store's async
//! operations on the local executor.

use std::rc::Rc;
use std::sync::Arc;

use leptos::prelude::*;
use lib_core::api::ApiClient;
use lib_core::config::ClientConfig;
use lib_core::error::ConfigError;
use lib_core::store::{WalletState, WalletStore};
use shared::Wallet;

use crate::services::BrowserStorage;
use crate::state::notifications::{ToastContext, ToastNotifier};
use crate::utils::constants::client_config;

pub type AppWalletStore = WalletStore<ApiClient, BrowserStorage>;

/// Global wallet context
#[derive(Clone, Copy)]
pub struct WalletContext {
    pub state: RwSignal<WalletState>,
    store: StoredValue<Rc<AppWalletStore>, LocalStorage>,
    api: StoredValue<ApiClient, LocalStorage>,
    config: StoredValue<ClientConfig>,
}

impl WalletContext {
    fn new(config: ClientConfig, toasts: ToastContext) -> Result<Self, ConfigError> {
        let api = ApiClient::new(&config, Arc::new(ToastNotifier::new(toasts)))?;
        let store = Rc::new(WalletStore::new(api.clone(), BrowserStorage::new(), config.storage_key.clone()));

        let state = RwSignal::new(store.snapshot());
        store.subscribe(move |snapshot| {
            state.try_set(snapshot.clone());
        });

        Ok(Self {
            state,
            store: StoredValue::new_local(store),
            api: StoredValue::new_local(api),
            config: StoredValue::new(config),
        })
    }

    pub fn wallet_id(&self) -> Option<String> {
        self.state.with(|state| state.wallet_id.clone())
    }

    pub fn has_wallet(&self) -> bool {
        self.state.with(|state| state.wallet_id.is_some())
    }

    pub fn wallet(&self) -> Option<Wallet> {
        self.state.with(|state| state.ready_wallet().cloned())
    }

    pub fn is_loading(&self) -> bool {
        self.state.with(|state| state.is_loading)
    }

    pub fn error(&self) -> Option<String> {
        self.state.with(|state| state.error.clone())
    }

    pub fn api(&self) -> Option<ApiClient> {
        self.api.try_get_value()
    }

    pub fn config(&self) -> ClientConfig {
        self.config.get_value()
    }

    pub fn set_wallet_id(&self, id: String) {
        if let Some(store) = self.store.try_get_value() {
            leptos::task::spawn_local(async move {
                store.set_wallet_id(&id).await;
            });
        }
    }

    /// Re-fetch the active wallet, e.g. after a transaction changed its balance.
    pub fn reload(&self) {
        if let Some(store) = self.store.try_get_value() {
            leptos::task::spawn_local(async move {
                store.reload().await;
            });
        }
    }

    pub fn clear_wallet(&self) {
        self.store.try_with_value(|store| store.clear_wallet());
    }

    fn init(&self) {
        if let Some(store) = self.store.try_get_value() {
            leptos::task::spawn_local(async move {
                store.init().await;
            });
        }
    }

    fn teardown(&self) {
        self.store.try_with_value(|store| store.teardown());
    }
}

pub fn provide_wallet_context(toasts: ToastContext) -> Result<WalletContext, ConfigError> {
    let context = WalletContext::new(client_config(), toasts)?;
    provide_context(context);
    context.init();
    on_cleanup(move || context.teardown());
    Ok(context)
}

pub fn use_wallet_context() -> WalletContext {
    expect_context::<WalletContext>()
}
