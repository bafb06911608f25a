//! Route guard for session-protected pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected routes wrap their content in `RequireSession`. The guard only
//! checks that a token is stored; the backend still validates it on every
//! authorized call.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::{AuthState, SIGNIN_ROUTE};
use crate::state::session::Session;

/// What a guarded route should show for the current auth state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session not read yet (server render or pre-hydration).
    Pending,
    Allow,
    Redirect(&'static str),
}

impl GuardDecision {
    /// Text shown instead of the guarded children; `None` only for `Allow`.
    pub fn placeholder(self) -> Option<&'static str> {
        match self {
            Self::Allow => None,
            Self::Pending => Some("Checking your session..."),
            Self::Redirect(_) => Some("Redirecting to sign in..."),
        }
    }
}

pub fn guard_decision(state: &AuthState) -> GuardDecision {
    if state.loading {
        GuardDecision::Pending
    } else if state.is_authenticated() {
        GuardDecision::Allow
    } else {
        GuardDecision::Redirect(SIGNIN_ROUTE)
    }
}

/// Navigate to the sign-in route whenever auth has loaded and no token is present.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if let GuardDecision::Redirect(path) = guard_decision(&auth.get()) {
            navigate(path, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}

/// Render `children` only while a session token is stored.
///
/// The stored session is read on mount in the browser; until then a neutral
/// placeholder is shown, and once read without a token the user is sent to
/// `/signin` without the children ever rendering.
#[component]
pub fn RequireSession(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let session = expect_context::<Session>();

    // Effects only run in the browser, so SSR stays in `Pending`.
    Effect::new(move || {
        auth.set(AuthState::resolved(session.token()));
    });
    install_unauth_redirect(auth, use_navigate());

    // Memoized so re-setting an unchanged state does not remount the children.
    let decision = Memo::new(move |_| guard_decision(&auth.get()));
    move || match decision.get().placeholder() {
        None => children().into_any(),
        Some(message) => view! { <p class="guard-message">{message}</p> }.into_any(),
    }
}
