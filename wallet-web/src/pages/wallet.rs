//! `/wallet`: setup form until a wallet exists, then the dashboard

use leptos::prelude::*;

use crate::components::{WalletDashboard, WalletSetupForm};
use crate::state::wallet::use_wallet_context;

#[component]
pub fn WalletPage() -> impl IntoView {
    let wallet_ctx = use_wallet_context();

    view! {
        <div class="page">
            {move || wallet_ctx.error().map(|error| view! { <div class="error-box">{error}</div> })}

            <Show
                when=move || wallet_ctx.has_wallet()
                fallback=|| view! { <div class="centered"><WalletSetupForm /></div> }
            >
                <WalletDashboard />
            </Show>
        </div>
    }
}
