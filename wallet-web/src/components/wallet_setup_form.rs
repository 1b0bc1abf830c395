//! Wallet creation form

use leptos::logging::log;
use leptos::prelude::*;
use lib_core::forms::{submit_setup, FormError, WalletForm, MIN_AMOUNT, SETUP_FAILED_MESSAGE};

use crate::hooks::{sleep_for, use_debouncer};
use crate::state::wallet::use_wallet_context;

#[component]
pub fn WalletSetupForm() -> impl IntoView {
    let wallet_ctx = use_wallet_context();
    let debouncer = use_debouncer();

    let name = RwSignal::new(String::new());
    let balance = RwSignal::new(String::new());
    let errors = RwSignal::new(FormError::default());
    let (submitting, set_submitting) = signal(false);
    let (submit_error, set_submit_error) = signal(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let form = WalletForm { name: name.get_untracked(), balance: balance.get_untracked() };
        let input = match form.validate() {
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
                    set_submit_error.try_set(None);
                    submit_setup(&api, &input).await
                })
                .await;

            match outcome {
                None => return,
                Some(Ok(response)) => {
                    log!("Created wallet {}", response.id);
                    wallet_ctx.set_wallet_id(response.id);
                }
                Some(Err(e)) if e.is_cancelled() => {}
                Some(Err(e)) => {
                    log!("Failed to create wallet: {}", e);
                    set_submit_error.try_set(Some(SETUP_FAILED_MESSAGE.to_string()));
                }
            }
            set_submitting.try_set(false);
        });
    };

    let field_error = move |field: &'static str| {
        move || errors.with(|e| e.field(field).map(|message| view! { <p class="field-error">{message.to_string()}</p> }))
    };

    view! {
        <form class="card setup-form" novalidate on:submit=on_submit>
            <h2>"Create your wallet"</h2>

            <div class="form-field">
                <label for="name">"Username"</label>
                <input
                    type="text"
                    id="name"
                    placeholder="Enter wallet name"
                    class:invalid=move || errors.with(|e| e.field("name").is_some())
                    disabled=move || submitting.get()
                    bind:value=name
                />
                {field_error("name")}
            </div>

            <div class="form-field">
                <label for="balance">"Initial Balance (optional)"</label>
                <input
                    type="number"
                    id="balance"
                    min="0"
                    step=MIN_AMOUNT.to_string()
                    placeholder="0"
                    class:invalid=move || errors.with(|e| e.field("balance").is_some())
                    disabled=move || submitting.get()
                    bind:value=balance
                />
                {field_error("balance")}
            </div>

            {move || submit_error.get().map(|message| view! { <div class="error-box">{message}</div> })}

            <button type="submit" class="btn btn-primary full-width" disabled=move || submitting.get()>
                {move || if submitting.get() { "Creating..." } else { "Create Wallet" }}
            </button>
        </form>
    }
}
