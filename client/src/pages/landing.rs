//! Public landing page.

use leptos::prelude::*;

use crate::state::auth::{SIGNIN_ROUTE, SIGNUP_ROUTE};

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <div class="landing-page">
            <nav class="landing-nav">
                <span class="landing-nav__brand">"BudgetTracker"</span>
                <a href=SIGNIN_ROUTE class="btn landing-nav__signin">"Sign In"</a>
            </nav>
            <section class="landing-hero">
                <h1>"Take Control of Your Finances"</h1>
                <p class="landing-hero__lead">
                    "Track your expenses, set budgets, and achieve your financial goals with our easy-to-use budget tracker."
                </p>
                <a href=SIGNUP_ROUTE class="btn btn--primary">"Get Started"</a>
            </section>
        </div>
    }
}
