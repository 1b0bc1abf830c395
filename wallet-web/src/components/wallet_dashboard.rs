//! Balance card and transaction form for the active wallet

use leptos::prelude::*;

use crate::components::{TransactionForm, WalletBalanceSkeleton, WalletTransactionFormSkeleton};
use crate::state::wallet::use_wallet_context;
use crate::utils::format::format_balance;

#[component]
pub fn WalletDashboard() -> impl IntoView {
    let wallet_ctx = use_wallet_context();

    view! {
        <div class="dashboard-grid">
            {move || match wallet_ctx.wallet() {
                Some(wallet) if !wallet_ctx.is_loading() => {
                    view! {
                        <div class="card balance-card">
                            <h2 class="wallet-name">{wallet.name}</h2>
                            <div class="wallet-balance">{format_balance(wallet.balance)}</div>
                            <button type="button" class="btn btn-outline switch-wallet" on:click=move |_| wallet_ctx.clear_wallet()>
                                "Use another wallet"
                            </button>
                        </div>
                    }
                        .into_any()
                }
                _ => view! { <WalletBalanceSkeleton /> }.into_any(),
            }}

            <Show
                when=move || !wallet_ctx.is_loading()
                fallback=|| view! { <WalletTransactionFormSkeleton /> }
            >
                <div class="card">
                    <h3>"New Transaction"</h3>
                    <TransactionForm />
                </div>
            </Show>
        </div>
    }
}
