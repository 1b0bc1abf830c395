//! Paginated transaction feed

use leptos::prelude::*;
use lib_core::api::ApiClient;
use lib_core::feed::{TransactionFetcher, TransactionQuery};
use lib_core::pagination::Phase;
use shared::{SortSpec, Transaction};

use crate::components::{ExportButton, TransactionListSkeleton, TransactionSort};
use crate::hooks::use_api_pagination;
use crate::state::wallet::use_wallet_context;
use crate::utils::format::{amount_class, format_running_balance, format_transaction_amount, format_transaction_date};

#[component]
pub fn TransactionTable() -> impl IntoView {
    let wallet_ctx = use_wallet_context();
    let sort = RwSignal::new(SortSpec::default());

    let Some(api) = wallet_ctx.api() else {
        return view! { <div class="error-box">"Failed to load transactions. Please try again."</div> }
            .into_any();
    };

    let feed = use_api_pagination(
        TransactionFetcher::new(api),
        wallet_ctx.config().page_size,
        move || {
            let query = TransactionQuery::new(wallet_ctx.wallet_id(), sort.get());
            (query.is_enabled(), query)
        },
    );
    let state = feed.state;

    let has_error = move || state.with(|s| s.error.is_some());
    let is_loading = move || state.with(|s| s.is_loading);
    let loaded = move || state.with(|s| s.phase == Phase::Loaded);

    view! {
        <div class="transaction-feed">
            <div class="feed-toolbar">
                <TransactionSort sort=sort />
                <ExportButton sort=sort />
            </div>

            <Show when=has_error>
                <div class="error-box">
                    "Failed to load transactions. Please try again."
                    <button type="button" class="btn btn-outline retry" on:click=move |_| feed.refresh()>
                        "Retry"
                    </button>
                </div>
            </Show>

            <div class="card table-card">
                <table class="transaction-table">
                    <thead>
                        <tr>
                            <th>"Date"</th>
                            <th>"Description"</th>
                            <th class="numeric">"Amount"</th>
                            <th class="numeric">"Balance"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || state.with(|s| s.items.clone())
                            key=|transaction: &Transaction| transaction.id.clone()
                            children=|transaction| view! { <TransactionRow transaction=transaction /> }
                        />
                    </tbody>
                </table>

                <Show when=is_loading>
                    <TransactionListSkeleton />
                </Show>

                <Show when=move || state.with(|s| s.can_load_more())>
                    <div class="feed-footer">
                        <button type="button" class="btn btn-outline" on:click=move |_| feed.load_more()>
                            "Load More"
                        </button>
                    </div>
                </Show>

                <Show when=move || loaded() && state.with(|s| s.is_exhausted())>
                    <div class="feed-footer muted">"No more transactions to load."</div>
                </Show>

                <Show when=move || loaded() && state.with(|s| s.is_empty())>
                    <div class="feed-empty muted">"No transactions found."</div>
                </Show>
            </div>
        </div>
    }
    .into_any()
}

#[component]
fn TransactionRow(transaction: Transaction) -> impl IntoView {
    view! {
        <tr>
            <td class="muted">{format_transaction_date(&transaction.date)}</td>
            <td>{transaction.description.clone()}</td>
            <td class=format!("numeric {}", amount_class(transaction.amount))>
                {format_transaction_amount(transaction.amount)}
            </td>
            <td class="numeric muted">{format_running_balance(transaction.balance)}</td>
        </tr>
    }
}
