//! Wallet web client
//!
//! Leptos CSR front end for the wallet service: wallet setup, deposits and
//! withdrawals, and a paginated, sortable transaction history with CSV export.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

mod app;
mod components;
mod hooks;
mod pages;
mod services;
mod state;
mod utils;

use app::App;

#[wasm_bindgen(start)]
pub fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    wasm_logger::init(wasm_logger::Config::default());
    log::info!("Wallet client starting, API at {}", utils::constants::API_BASE);

    hide_loading_screen();
    leptos::mount::mount_to_body(|| view! { <App/> });
}

/// Hide the static loading placeholder from index.html.
fn hide_loading_screen() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::warn!("No document available");
        return;
    };

    match document.get_element_by_id("app-loading") {
        Some(element) => {
            if let Some(html_element) = element.dyn_ref::<HtmlElement>() {
                html_element.class_list().add_1("hidden").ok();
            }
            element.set_attribute("style", "display: none !important;").ok();
        }
        None => log::debug!("Loading element not found"),
    }
}
