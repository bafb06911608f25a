//! Auth-session state and credential submission flows.
//!
//! SYSTEM CONTEXT
//! ==============
//! `AuthState` is the reactive mirror of the stored session that route guards
//! watch. The `submit_*` flows validate a form, call the API client, persist
//! the returned token, and name the route to navigate to next.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use super::form::{FieldErrors, validate_signin, validate_signup};
use super::session::Session;
use crate::net::api::ApiClient;
use crate::net::error::ApiError;
use crate::net::http::HttpTransport;
use crate::net::types::{AuthResponse, Credentials};

pub const SIGNIN_ROUTE: &str = "/signin";
pub const SIGNUP_ROUTE: &str = "/signup";
pub const DASHBOARD_ROUTE: &str = "/dashboard";

/// Authentication state tracking the session token and whether it has been read.
///
/// `loading` stays `true` until the browser session is inspected, which never
/// happens during server rendering.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub token: Option<String>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { token: None, loading: true }
    }
}

impl AuthState {
    /// State after reading the session store.
    pub fn resolved(token: Option<String>) -> Self {
        Self { token, loading: false }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

/// Why a form submission did not complete.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("form has invalid fields")]
    Invalid(FieldErrors),
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Validate and submit sign-in credentials.
///
/// On success the returned token (if any) is stored and the dashboard route is
/// returned.
///
/// # Errors
///
/// `Invalid` without any request when fields fail validation, otherwise the
/// API client's failure.
pub async fn submit_signin<T: HttpTransport>(
    api: &ApiClient<T>,
    session: &Session,
    credentials: &Credentials,
) -> Result<&'static str, SubmitError> {
    validate_signin(credentials).map_err(SubmitError::Invalid)?;
    let resp = api.signin(credentials).await?;
    log::info!("signin succeeded");
    persist_token(session, &resp);
    Ok(DASHBOARD_ROUTE)
}

/// Validate and submit sign-up credentials.
///
/// On success the returned token (if any) is stored and the sign-in route is
/// returned.
///
/// # Errors
///
/// `Invalid` without any request when fields fail validation, otherwise the
/// API client's failure.
pub async fn submit_signup<T: HttpTransport>(
    api: &ApiClient<T>,
    session: &Session,
    credentials: &Credentials,
) -> Result<&'static str, SubmitError> {
    validate_signup(credentials).map_err(SubmitError::Invalid)?;
    let resp = api.signup(credentials).await?;
    log::info!("signup succeeded");
    persist_token(session, &resp);
    Ok(SIGNIN_ROUTE)
}

fn persist_token(session: &Session, resp: &AuthResponse) {
    match resp.token.as_deref() {
        Some(token) if !token.is_empty() => session.set_token(token),
        _ => log::debug!("auth response carried no token"),
    }
}
