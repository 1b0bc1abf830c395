//! Sort controls for the transaction feed

use leptos::prelude::*;
use shared::{SortField, SortOrder, SortSpec};

#[component]
pub fn TransactionSort(sort: RwSignal<SortSpec>) -> impl IntoView {
    let on_field = move |ev: leptos::ev::Event| {
        if let Some(field) = SortField::parse(&event_target_value(&ev)) {
            sort.update(|spec| spec.field = field);
        }
    };

    view! {
        <div class="sort-controls">
            <label class="sort-label" for="sort-field">"Sort by:"</label>
            <select
                id="sort-field"
                class="sort-select"
                prop:value=move || sort.get().field.as_str()
                on:change=on_field
            >
                {SortField::ALL
                    .into_iter()
                    .map(|field| view! { <option value=field.as_str()>{field.label()}</option> })
                    .collect_view()}
            </select>

            <button
                type="button"
                class="sort-order"
                on:click=move |_| sort.update(|spec| spec.order = spec.order.toggled())
            >
                {move || match sort.get().order {
                    SortOrder::Asc => "↑ Ascending",
                    SortOrder::Desc => "↓ Descending",
                }}
            </button>
        </div>
    }
}
