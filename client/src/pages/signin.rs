//! Sign-in page: email + password, stores the session token on success.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::form_field::{CredentialForm, FormField, SubmitErrorBanner};
use crate::net::api::BrowserApi;
use crate::state::auth::{AuthState, SIGNUP_ROUTE};
use crate::state::form::{Field, validate_signin};
use crate::state::session::Session;

#[component]
pub fn SigninPage() -> impl IntoView {
    let api = expect_context::<BrowserApi>();
    let session = expect_context::<Session>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    let form = CredentialForm::new();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let credentials = form.signin_credentials();
        if !form.begin(validate_signin(&credentials)) {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let api = api.clone();
            let session = session.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::state::auth::submit_signin(&api, &session, &credentials).await {
                    Ok(next) => {
                        let _ = auth.try_set(AuthState::resolved(session.token()));
                        form.finish();
                        navigate(next, leptos_router::NavigateOptions::default());
                    }
                    Err(e) => {
                        log::warn!("signin failed: {e}");
                        form.fail(e);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&api, &session, &navigate, auth, credentials);
        }
    };

    let busy = form.busy;

    view! {
        <div class="auth-page signin-page">
            <div class="auth-card">
                <div class="auth-card__header">
                    <h1>"Login"</h1>
                    <p>"Join Budget Tracker and take control of your finances"</p>
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
                        id="password"
                        label="Password"
                        input_type="password"
                        placeholder="Enter your password"
                        value=form.password
                        error=form.error(Field::Password)
                        disabled=busy
                        on_edit=form.on_edit(Field::Password)
                    />

                    <SubmitErrorBanner message=form.server_error/>

                    <button type="submit" class="auth-button" disabled=move || busy.get()>
                        {move || if busy.get() { "Checking Credentials..." } else { "Login Account" }}
                    </button>
                </form>

                <div class="auth-card__footer">
                    <p>"New to Budget Tracker? " <a href=SIGNUP_ROUTE>"Sign up"</a></p>
                </div>
            </div>
        </div>
    }
}
