use leptos::prelude::*;
use shared::TransactionType;

#[component]
pub fn TransactionTypeButton(
    kind: TransactionType,
    #[prop(into)] selected: Signal<bool>,
    #[prop(into)] disabled: Signal<bool>,
    on_select: impl Fn(TransactionType) + 'static,
) -> impl IntoView {
    let class = move || match (selected.get(), kind) {
        (true, TransactionType::Credit) => "type-button type-credit selected",
        (true, TransactionType::Debit) => "type-button type-debit selected",
        (false, _) => "type-button",
    };

    view! {
        <button
            type="button"
            class=class
            disabled=move || disabled.get()
            on:click=move |_| on_select(kind)
        >
            {kind.label()}
        </button>
    }
}
