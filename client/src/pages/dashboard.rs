//! Dashboard page listing the signed-in user's transactions.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the protected route. `RequireSession` gates it, and the list is
//! fetched once per mount with the stored token as bearer credential.

use leptos::prelude::*;

use crate::components::transaction_list::TransactionList;
use crate::net::api::BrowserApi;
use crate::state::auth::AuthState;
use crate::state::session::Session;
use crate::state::transactions::{EMPTY_STATE_MESSAGE, TransactionsState};
use crate::util::auth::RequireSession;

/// Dashboard page; redirects to `/signin` when no session token is stored.
#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <RequireSession>
            <DashboardContent/>
        </RequireSession>
    }
}

#[component]
fn DashboardContent() -> impl IntoView {
    let api = expect_context::<BrowserApi>();
    let session = expect_context::<Session>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let transactions = RwSignal::new(TransactionsState::Loading);

    #[cfg(feature = "hydrate")]
    {
        let session = session.clone();
        leptos::task::spawn_local(async move {
            let next = crate::state::transactions::load_transactions(&api, &session).await;
            // The dashboard may have been left before the request settled.
            let _ = transactions.try_set(next);
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = api;
    }

    let on_sign_out = move |_| {
        session.clear();
        log::info!("signed out");
        // The guard reacts to the cleared state and navigates to sign-in.
        auth.set(AuthState::resolved(None));
    };

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h2>"Welcome to Your Budget Dashboard"</h2>
                <button class="btn dashboard-page__sign-out" on:click=on_sign_out>
                    "Sign out"
                </button>
            </header>
            {move || match transactions.get() {
                TransactionsState::Loading => {
                    view! { <p class="dashboard-page__loading">"Loading your transactions..."</p> }.into_any()
                }
                TransactionsState::Failed(message) => {
                    view! {
                        <div class="dashboard-page__error" role="alert">
                            {message}
                        </div>
                    }
                        .into_any()
                }
                TransactionsState::Loaded(items) if items.is_empty() => {
                    view! { <p class="dashboard-page__empty">{EMPTY_STATE_MESSAGE}</p> }.into_any()
                }
                TransactionsState::Loaded(items) => {
                    view! {
                        <section class="dashboard-page__transactions">
                            <h3>"Your Transactions"</h3>
                            <TransactionList items=items/>
                        </section>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
