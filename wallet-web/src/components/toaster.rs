//! Toast stack

use leptos::prelude::*;
use lib_core::notify::Severity;

use crate::state::notifications::use_toasts;

#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = use_toasts();

    view! {
        <div class="toaster" role="status" aria-live="polite">
            <For
                each=move || toasts.toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    let class = match toast.severity {
                        Severity::Error => "toast toast-error",
                        Severity::Success => "toast toast-success",
                    };
                    let id = toast.id;
                    view! {
                        <div class=class on:click=move |_| toasts.dismiss(id)>
                            {toast.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
