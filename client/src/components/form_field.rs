//! Labeled form input with an inline field error, plus the signal bundle the
//! sign-in and sign-up pages share.
//!
//! DESIGN
//! ======
//! Both credential pages follow the same lifecycle (edit clears errors, submit
//! validates then goes busy, completion re-enables the form), so the signals
//! and transitions live here once.

use leptos::prelude::*;

use crate::net::types::Credentials;
use crate::state::auth::SubmitError;
use crate::state::form::{Field, FieldErrors};

/// Input with label and an error message shown beneath it.
#[component]
pub fn FormField(
    id: &'static str,
    label: &'static str,
    input_type: &'static str,
    placeholder: &'static str,
    value: RwSignal<String>,
    #[prop(into)] error: Signal<Option<&'static str>>,
    #[prop(into)] disabled: Signal<bool>,
    on_edit: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label for=id>{label}</label>
            <input
                type=input_type
                id=id
                name=id
                placeholder=placeholder
                class=move || if error.get().is_some() { "error" } else { "" }
                prop:value=move || value.get()
                disabled=move || disabled.get()
                on:input=move |ev| {
                    value.set(event_target_value(&ev));
                    on_edit.run(());
                }
            />
            <Show when=move || error.get().is_some()>
                <span class="error-message">{move || error.get().unwrap_or_default()}</span>
            </Show>
        </div>
    }
}

/// Reactive state behind a credential form.
#[derive(Clone, Copy, Debug)]
pub struct CredentialForm {
    pub username: RwSignal<String>,
    pub name: RwSignal<String>,
    pub password: RwSignal<String>,
    pub errors: RwSignal<FieldErrors>,
    pub server_error: RwSignal<Option<String>>,
    pub busy: RwSignal<bool>,
}

impl CredentialForm {
    pub fn new() -> Self {
        Self {
            username: RwSignal::new(String::new()),
            name: RwSignal::new(String::new()),
            password: RwSignal::new(String::new()),
            errors: RwSignal::new(FieldErrors::default()),
            server_error: RwSignal::new(None),
            busy: RwSignal::new(false),
        }
    }

    pub fn signin_credentials(self) -> Credentials {
        Credentials::signin(self.username.get_untracked(), self.password.get_untracked())
    }

    pub fn signup_credentials(self) -> Credentials {
        Credentials::signup(
            self.username.get_untracked(),
            self.name.get_untracked(),
            self.password.get_untracked(),
        )
    }

    /// Editing a field clears its message and any server error.
    pub fn on_edit(self, field: Field) -> Callback<()> {
        Callback::new(move |()| {
            self.errors.update(|errors| errors.clear(field));
            self.server_error.set(None);
        })
    }

    pub fn error(self, field: Field) -> Signal<Option<&'static str>> {
        Signal::derive(move || self.errors.get().get(field))
    }

    /// Apply a validation result and go busy if the form may be submitted.
    ///
    /// Returns `false` when a submission is already in flight or fields are invalid.
    pub fn begin(self, validation: Result<(), FieldErrors>) -> bool {
        if self.busy.get_untracked() {
            return false;
        }
        match validation {
            Ok(()) => {
                self.errors.set(FieldErrors::default());
                self.server_error.set(None);
                self.busy.set(true);
                true
            }
            Err(fields) => {
                self.errors.set(fields);
                false
            }
        }
    }

    /// Record a failed submission. Writes are skipped if the page has unmounted.
    pub fn fail(self, err: SubmitError) {
        match err {
            SubmitError::Invalid(fields) => {
                let _ = self.errors.try_set(fields);
            }
            SubmitError::Api(e) => {
                let _ = self.server_error.try_set(Some(e.to_string()));
            }
        }
        let _ = self.busy.try_set(false);
    }

    /// Re-enable the form after a successful submission.
    pub fn finish(self) {
        let _ = self.busy.try_set(false);
    }
}

impl Default for CredentialForm {
    fn default() -> Self {
        Self::new()
    }
}

/// Top-of-form server error banner.
#[component]
pub fn SubmitErrorBanner(message: RwSignal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || message.get().is_some()>
            <div class="error-message submit-error" role="alert">
                {move || message.get().unwrap_or_default()}
            </div>
        </Show>
    }
}
