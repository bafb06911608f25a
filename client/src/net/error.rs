//! Failure kinds surfaced by network-facing operations.
//!
//! Every call into the budget API resolves to one of these variants before it
//! reaches a page, so views render `to_string()` and never inspect raw
//! transport errors.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

pub const CONNECTIVITY_MESSAGE: &str = "Unable to connect to the server. Please try again later.";
pub const NO_TOKEN_MESSAGE: &str = "No authentication token found. Please sign in again.";
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch transactions. Please try again.";
pub const SIGNUP_FAILED_MESSAGE: &str = "Signup failed";
pub const SIGNIN_FAILED_MESSAGE: &str = "Sign in failed";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// Backend unreachable or answered with something other than JSON.
    #[error("Unable to connect to the server. Please try again later.")]
    Connectivity,

    /// Backend rejected the request (validation, duplicate account, bad credentials).
    #[error("{0}")]
    Request(String),

    /// No stored session token when one was required.
    #[error("No authentication token found. Please sign in again.")]
    Auth,

    /// Authorized read failed after a token was present.
    #[error("{0}")]
    Fetch(String),
}

/// Lower-level failure from an `HttpTransport`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("transport failed: {0}")]
pub struct TransportError(pub String);
