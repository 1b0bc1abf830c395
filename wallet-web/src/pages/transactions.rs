//! `/transactions`: the feed of the active wallet

use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::components::TransactionTable;
use crate::state::wallet::use_wallet_context;
use crate::utils::constants::WALLET_PATH;

#[component]
pub fn TransactionsPage() -> impl IntoView {
    let wallet_ctx = use_wallet_context();

    view! {
        <Show
            when=move || wallet_ctx.has_wallet()
            fallback=|| view! { <Redirect path=WALLET_PATH /> }
        >
            <div class="page">
                <h2 class="page-title">"Transaction History"</h2>
                <TransactionTable />
            </div>
        </Show>
    }
}
