//! REST API client for the budget backend.
//!
//! ERROR HANDLING
//! ==============
//! Each call resolves to `Result<_, ApiError>`. Transport failures, non-JSON
//! replies, and rejected requests are folded into the tagged variants here so
//! pages only ever display `ApiError::to_string()`.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::{ApiError, FETCH_FAILED_MESSAGE, SIGNIN_FAILED_MESSAGE, SIGNUP_FAILED_MESSAGE};
use super::http::{BrowserTransport, HttpResponse, HttpTransport};
use super::types::{AuthResponse, Credentials, ErrorBody, Transaction};
use crate::config::ClientConfig;

const SIGNUP_PATH: &str = "/user/signup";
const SIGNIN_PATH: &str = "/user/signin";
const TRANSACTIONS_PATH: &str = "/transactions";

/// API client bound to the browser transport; provided via Leptos context.
pub type BrowserApi = ApiClient<BrowserTransport>;

/// Budget API client over an injectable transport.
#[derive(Clone, Debug)]
pub struct ApiClient<T> {
    base_url: String,
    transport: T,
}

impl BrowserApi {
    pub fn browser(config: &ClientConfig) -> Self {
        Self::new(config.api_base_url.clone(), BrowserTransport)
    }
}

impl<T: HttpTransport> ApiClient<T> {
    pub fn new(base_url: impl Into<String>, transport: T) -> Self {
        Self { base_url: base_url.into(), transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Create an account via `POST /user/signup`.
    ///
    /// # Errors
    ///
    /// `Connectivity` if the backend is unreachable or replies with non-JSON,
    /// `Request` with the backend message if the request is rejected.
    pub async fn signup(&self, credentials: &Credentials) -> Result<AuthResponse, ApiError> {
        self.post_credentials(SIGNUP_PATH, credentials, SIGNUP_FAILED_MESSAGE).await
    }

    /// Authenticate via `POST /user/signin`.
    ///
    /// # Errors
    ///
    /// Same as [`ApiClient::signup`], with `"Sign in failed"` as the fallback message.
    pub async fn signin(&self, credentials: &Credentials) -> Result<AuthResponse, ApiError> {
        self.post_credentials(SIGNIN_PATH, credentials, SIGNIN_FAILED_MESSAGE).await
    }

    /// List transactions via `GET /transactions` using `token` as bearer credential.
    ///
    /// # Errors
    ///
    /// Any failure maps to `Fetch`, carrying the backend message when one is present.
    pub async fn fetch_transactions(&self, token: &str) -> Result<Vec<Transaction>, ApiError> {
        let url = endpoint(&self.base_url, TRANSACTIONS_PATH);
        let resp = self
            .transport
            .get_authorized(&url, token)
            .await
            .map_err(|e| {
                log::warn!("transactions request failed: {e}");
                ApiError::Fetch(FETCH_FAILED_MESSAGE.to_owned())
            })?;
        interpret_transactions_response(&resp)
    }

    async fn post_credentials(
        &self,
        path: &str,
        credentials: &Credentials,
        fallback: &str,
    ) -> Result<AuthResponse, ApiError> {
        let url = endpoint(&self.base_url, path);
        let payload = serde_json::to_value(credentials).map_err(|_| ApiError::Connectivity)?;
        let resp = self.transport.post_json(&url, &payload).await.map_err(|e| {
            log::warn!("{path} request failed: {e}");
            ApiError::Connectivity
        })?;
        interpret_auth_response(&resp, fallback)
    }
}

fn endpoint(base_url: &str, path: &str) -> String {
    format!("{}{path}", base_url.trim_end_matches('/'))
}

fn is_json_content_type(content_type: Option<&str>) -> bool {
    content_type.is_some_and(|value| value.to_ascii_lowercase().contains("application/json"))
}

/// Map an auth endpoint response to the parsed body or a tagged failure.
///
/// The content-type check runs first: a non-JSON reply is a connectivity
/// problem whatever its status.
fn interpret_auth_response(resp: &HttpResponse, fallback: &str) -> Result<AuthResponse, ApiError> {
    if !is_json_content_type(resp.content_type.as_deref()) {
        return Err(ApiError::Connectivity);
    }
    if !resp.ok() {
        let message = ErrorBody::message_from(&resp.body).unwrap_or_else(|| fallback.to_owned());
        return Err(ApiError::Request(message));
    }
    serde_json::from_str(&resp.body).map_err(|_| ApiError::Connectivity)
}

fn interpret_transactions_response(resp: &HttpResponse) -> Result<Vec<Transaction>, ApiError> {
    if !resp.ok() {
        let message = ErrorBody::message_from(&resp.body).unwrap_or_else(|| FETCH_FAILED_MESSAGE.to_owned());
        return Err(ApiError::Fetch(message));
    }
    serde_json::from_str(&resp.body).map_err(|_| ApiError::Fetch(FETCH_FAILED_MESSAGE.to_owned()))
}
