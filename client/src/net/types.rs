//! Wire DTOs for the budget API.
//!
//! DESIGN
//! ======
//! Response types tolerate missing optional fields so a partially populated
//! backend payload still decodes; unknown auth fields are kept in `extra`.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Form credentials submitted to `/user/signup` or `/user/signin`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    /// Email address used as the account name.
    pub username: String,
    /// Display name; only sent on sign-up.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub password: String,
}

impl Credentials {
    /// Sign-in payload: username and password only.
    pub fn signin(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self { username: username.into(), name: None, password: password.into() }
    }

    /// Sign-up payload including the display name.
    pub fn signup(username: impl Into<String>, name: impl Into<String>, password: impl Into<String>) -> Self {
        Self { username: username.into(), name: Some(name.into()), password: password.into() }
    }
}

/// Body returned by the auth endpoints on success.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// A single budget transaction as listed on the dashboard.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Backend identifier; Mongo-style backends send it as `_id`.
    #[serde(default, alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub description: String,
    pub amount: f64,
}

/// Error envelope; only `message` is read.
#[derive(Clone, Debug, Default, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorBody {
    /// Parse `raw` and return a non-blank `message`, if any.
    pub(crate) fn message_from(raw: &str) -> Option<String> {
        serde_json::from_str::<Self>(raw)
            .ok()
            .and_then(|body| body.message)
            .filter(|message| !message.trim().is_empty())
    }
}
