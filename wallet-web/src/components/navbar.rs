//! Navigation bar

use leptos::prelude::*;
use leptos_router::components::A;

use crate::utils::constants::{APP_TITLE, NAV_LINKS};

#[component]
pub fn Navbar() -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);

    view! {
        <nav class="navbar">
            <div class="navbar-inner">
                <A href="/" attr:class="nav-link-clean">
                    <span class="nav-title">{APP_TITLE}</span>
                </A>

                <div class="nav-links">
                    {NAV_LINKS
                        .iter()
                        .map(|(href, label)| view! { <A href=*href attr:class="nav-link">{*label}</A> })
                        .collect_view()}
                </div>

                <button
                    type="button"
                    class="nav-menu-toggle"
                    aria-label="Toggle navigation"
                    aria-expanded=move || menu_open.get().to_string()
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    {move || if menu_open.get() { "✕" } else { "☰" }}
                </button>
            </div>

            <div class="nav-mobile" class:open=move || menu_open.get()>
                {NAV_LINKS
                    .iter()
                    .map(|(href, label)| {
                        view! {
                            <A href=*href attr:class="nav-mobile-link" on:click=move |_| set_menu_open.set(false)>
                                {*label}
                            </A>
                        }
                    })
                    .collect_view()}
            </div>
        </nav>
    }
}
