//! Credit/debit form for the active wallet

use leptos::logging::log;
use leptos::prelude::*;
use lib_core::forms::{
    submit_transaction, FormError, TransactionForm as TransactionFields, MIN_AMOUNT, TRANSACTION_FAILED_MESSAGE,
    TRANSACTION_SUCCESS_MESSAGE,
};
use shared::TransactionType;

use crate::components::TransactionTypeButton;
use crate::hooks::{sleep_for, use_debouncer};
use crate::state::notifications::use_toasts;
use crate::state::wallet::use_wallet_context;

#[component]
pub fn TransactionForm() -> impl IntoView {
    let wallet_ctx = use_wallet_context();
    let toasts = use_toasts();
    let debouncer = use_debouncer();

    let defaults = TransactionFields::default();
    let amount = RwSignal::new(defaults.amount);
    let description = RwSignal::new(defaults.description);
    let kind = RwSignal::new(defaults.kind);
    let errors = RwSignal::new(FormError::default());
    let (submitting, set_submitting) = signal(false);

    let reset = move || {
        let defaults = TransactionFields::default();
        amount.set(defaults.amount);
        description.set(defaults.description);
        kind.set(defaults.kind);
        errors.set(FormError::default());
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(wallet_id) = wallet_ctx.wallet_id() else { return };

        let fields = TransactionFields {
            amount: amount.get_untracked(),
            description: description.get_untracked(),
            kind: kind.get_untracked(),
        };
        let input = match fields.validate() {
            Ok(input) => input,
            Err(e) => {
                errors.set(e);
                return;
            }
        };
        errors.set(FormError::default());

        let Some(api) = wallet_ctx.api() else { return };
        let debouncer = debouncer.get_value();

        leptos::task::spawn_local(async move {
            let outcome = debouncer
                .run(sleep_for(&debouncer), || async {
                    set_submitting.try_set(true);
                    submit_transaction(&api, &wallet_id, &input).await
                })
                .await;

            match outcome {
                None => return,
                Some(Ok(response)) => {
                    log!("Transaction {} recorded, balance {}", response.transaction_id, response.balance);
                    reset();
                    toasts.success(TRANSACTION_SUCCESS_MESSAGE);
                    wallet_ctx.reload();
                }
                Some(Err(e)) if e.is_cancelled() => {}
                Some(Err(e)) => {
                    log!("{}: {}", TRANSACTION_FAILED_MESSAGE, e);
                }
            }
            set_submitting.try_set(false);
        });
    };

    let select_kind = move |selected: TransactionType| {
        if !submitting.get_untracked() {
            kind.set(selected);
        }
    };

    let field_error = move |field: &'static str| {
        move || errors.with(|e| e.field(field).map(|message| view! { <p class="field-error">{message.to_string()}</p> }))
    };

    view! {
        <form class="transaction-form" novalidate on:submit=on_submit>
            <div class="type-toggle">
                <TransactionTypeButton
                    kind=TransactionType::Credit
                    selected=Signal::derive(move || kind.get() == TransactionType::Credit)
                    disabled=submitting
                    on_select=select_kind
                />
                <TransactionTypeButton
                    kind=TransactionType::Debit
                    selected=Signal::derive(move || kind.get() == TransactionType::Debit)
                    disabled=submitting
                    on_select=select_kind
                />
            </div>

            <div class="form-field">
                <label for="amount">"Amount"</label>
                <input
                    type="number"
                    id="amount"
                    step=MIN_AMOUNT.to_string()
                    placeholder=MIN_AMOUNT.to_string()
                    class:invalid=move || errors.with(|e| e.field("amount").is_some())
                    disabled=move || submitting.get()
                    bind:value=amount
                />
                {field_error("amount")}
            </div>

            <div class="form-field">
                <label for="description">"Description"</label>
                <input
                    type="text"
                    id="description"
                    placeholder="Enter transaction description"
                    class:invalid=move || errors.with(|e| e.field("description").is_some())
                    disabled=move || submitting.get()
                    bind:value=description
                />
                {field_error("description")}
            </div>

            <button
                type="submit"
                class=move || match kind.get() {
                    TransactionType::Credit => "btn btn-primary full-width",
                    TransactionType::Debit => "btn btn-danger full-width",
                }
                disabled=move || submitting.get()
            >
                {move || {
                    if submitting.get() {
                        "Processing...".to_string()
                    } else {
                        format!("Add {}", kind.get().label().to_lowercase())
                    }
                }}
            </button>
        </form>
    }
}
