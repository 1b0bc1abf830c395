//! Root component: contexts, navigation and routes.

use leptos::prelude::*;
use leptos_router::{
    components::{Redirect, Route, Router, Routes, A},
    path,
};

use crate::components::{Navbar, Toaster};
use crate::pages::{TransactionsPage, WalletPage};
use crate::state::notifications::provide_toast_context;
use crate::state::wallet::provide_wallet_context;
use crate::utils::constants::WALLET_PATH;

#[component]
pub fn App() -> impl IntoView {
    let toasts = provide_toast_context();
    if let Err(err) = provide_wallet_context(toasts) {
        log::error!("Wallet client not started: {}", err);
        return view! { <ConfigErrorCard message=err.to_string()/> }.into_any();
    }

    view! {
        <Router>
            <div class="app-container">
                <Navbar/>
                <main class="app-main">
                    <Routes fallback=|| view! { <NotFound/> }>
                        <Route path=path!("/") view=|| view! { <Redirect path=WALLET_PATH/> }/>
                        <Route path=path!("/wallet") view=WalletPage/>
                        <Route path=path!("/transactions") view=TransactionsPage/>
                    </Routes>
                </main>
                <Toaster/>
            </div>
        </Router>
    }
    .into_any()
}

#[component]
fn ConfigErrorCard(message: String) -> impl IntoView {
    view! {
        <div class="centered">
            <div class="card" style="max-width: 500px; text-align: center;">
                <h1 class="card-title">"Wallet client unavailable"</h1>
                <p class="muted">{message}</p>
            </div>
        </div>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="centered">
            <div class="card" style="max-width: 500px; text-align: center;">
                <h1 class="card-title">"404 - Page Not Found"</h1>
                <p class="muted">"The page you're looking for doesn't exist."</p>
                <A href=WALLET_PATH>
                    <span class="btn btn-primary" style="margin-top: 20px; display: inline-block;">
                        "Go to Wallet"
                    </span>
                </A>
            </div>
        </div>
    }
}
