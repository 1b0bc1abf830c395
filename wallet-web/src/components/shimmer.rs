//! Loading placeholders

use leptos::prelude::*;

/// A pulsing bar of the given CSS width and height.
#[component]
pub fn Shimmer(#[prop(into)] width: String, #[prop(into)] height: String) -> impl IntoView {
    view! { <div class="shimmer" style=format!("width: {}; height: {};", width, height)></div> }
}

#[component]
pub fn TransactionListSkeleton(#[prop(default = 3)] rows: usize) -> impl IntoView {
    view! {
        <div class="skeleton-list">
            {(0..rows)
                .map(|_| {
                    view! {
                        <div class="skeleton-row">
                            <Shimmer width="6rem" height="1rem" />
                            <Shimmer width="12rem" height="1rem" />
                            <Shimmer width="5rem" height="1rem" />
                            <Shimmer width="5rem" height="1rem" />
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn WalletBalanceSkeleton() -> impl IntoView {
    view! {
        <div class="card">
            <Shimmer width="8rem" height="1.75rem" />
            <div class="skeleton-gap"></div>
            <Shimmer width="12rem" height="2.5rem" />
        </div>
    }
}

#[component]
pub fn WalletTransactionFormSkeleton() -> impl IntoView {
    view! {
        <div class="card">
            <Shimmer width="10rem" height="1.5rem" />
            <div class="skeleton-gap"></div>
            <div class="skeleton-row">
                <Shimmer width="50%" height="2.5rem" />
                <Shimmer width="50%" height="2.5rem" />
            </div>
            <Shimmer width="100%" height="2.5rem" />
            <div class="skeleton-gap"></div>
            <Shimmer width="100%" height="2.5rem" />
            <div class="skeleton-gap"></div>
            <Shimmer width="100%" height="2.5rem" />
        </div>
    }
}
