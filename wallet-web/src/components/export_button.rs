//! CSV export of the active wallet's transactions

use leptos::logging::log;
use leptos::prelude::*;
use lib_core::api::wallet::CSV_CONTENT_TYPE;
use lib_core::feed::export_transactions;
use shared::SortSpec;

use crate::services::download_bytes;
use crate::state::notifications::use_toasts;
use crate::state::wallet::use_wallet_context;

#[component]
pub fn ExportButton(#[prop(into)] sort: Signal<SortSpec>) -> impl IntoView {
    let wallet_ctx = use_wallet_context();
    let toasts = use_toasts();
    let (exporting, set_exporting) = signal(false);

    let on_export = move |_| {
        let (Some(wallet_id), Some(api)) = (wallet_ctx.wallet_id(), wallet_ctx.api()) else {
            return;
        };
        let sort = sort.get_untracked();
        set_exporting.set(true);

        leptos::task::spawn_local(async move {
            // Failures were already reported by the client
            if let Ok(export) = export_transactions(&api, &wallet_id, sort).await {
                match download_bytes(&export.filename, &export.bytes, CSV_CONTENT_TYPE) {
                    Ok(()) => toasts.push(export.notification()),
                    Err(e) => {
                        log!("Failed to start download: {:?}", e);
                        toasts.error("Failed to export transactions. Please try again.");
                    }
                }
            }
            set_exporting.try_set(false);
        });
    };

    view! {
        <button
            type="button"
            class="btn btn-secondary"
            disabled=move || !wallet_ctx.has_wallet() || exporting.get()
            on:click=on_export
        >
            {move || if exporting.get() { "Exporting..." } else { "Export Transactions" }}
        </button>
    }
}
