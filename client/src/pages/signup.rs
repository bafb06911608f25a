//! Sign-up page: email, full name, password; returns to sign-in on success.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::form_field::{CredentialForm, FormField, SubmitErrorBanner};
use crate::net::api::BrowserApi;
use crate::state::auth::SIGNIN_ROUTE;
use crate::state::form::{Field, validate_signup};
use crate::state::session::Session;

#[component]
pub fn SignupPage() -> impl IntoView {
    let api = expect_context::<BrowserApi>();
    let session = expect_context::<Session>();
    let navigate = use_navigate();
    let form = CredentialForm::new();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let credentials = form.signup_credentials();
        if !form.begin(validate_signup(&credentials)) {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let api = api.clone();
            let session = session.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::state::auth::submit_signup(&api, &session, &credentials).await {
                    Ok(next) => {
                        form.finish();
                        navigate(next, leptos_router::NavigateOptions::default());
                    }
                    Err(e) => {
                        log::warn!("signup failed: {e}");
                        form.fail(e);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&api, &session, &navigate, credentials);
        }
    };

    let busy = form.busy;

    view! {
        <div class="auth-page signup-page">
            <div class="auth-card">
                <div class="auth-card__header">
                    <h1>"Create Account"</h1>
                    <p>"Join BudgetTracker and take control of your finances"</p>
                </div>

                <form class="auth-form" on:submit=on_submit>
                    <FormField
                        id="username"
                        label="Email"
                        input_type="email"
                        placeholder="Enter your email"
                        value=form.username
                        error=form.error(Field::Username)
                        disabled=busy
                        on_edit=form.on_edit(Field::Username)
                    />
                    <FormField
                        id="name"
                        label="Full Name"
                        input_type="text"
                        placeholder="Enter your full name"
                        value=form.name
                        error=form.error(Field::Name)
                        disabled=busy
                        on_edit=form.on_edit(Field::Name)
                    />
                    <FormField
                        id="password"
                        label="Password"
                        input_type="password"
                        placeholder="Create a password"
                        value=form.password
                        error=form.error(Field::Password)
                        disabled=busy
                        on_edit=form.on_edit(Field::Password)
                    />

                    <SubmitErrorBanner message=form.server_error/>

                    <button type="submit" class="auth-button" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating Account..." } else { "Create Account" }}
                    </button>
                </form>

                <div class="auth-card__footer">
                    <p>"Already have an account? " <a href=SIGNIN_ROUTE>"Sign in"</a></p>
                </div>
            </div>
        </div>
    }
}
