//! Dashboard transaction loading state.
//!
//! DESIGN
//! ======
//! A mount starts in `Loading` and settles exactly once into `Loaded` or
//! `Failed`. There is no retry; remounting the dashboard starts over.

#[cfg(test)]
#[path = "transactions_test.rs"]
mod transactions_test;

use super::session::Session;
use crate::net::api::ApiClient;
use crate::net::error::ApiError;
use crate::net::http::HttpTransport;
use crate::net::types::Transaction;

pub const EMPTY_STATE_MESSAGE: &str = "No transactions found. Start by adding your first transaction!";

#[derive(Clone, Debug, Default, PartialEq)]
pub enum TransactionsState {
    #[default]
    Loading,
    Loaded(Vec<Transaction>),
    Failed(String),
}

impl From<Result<Vec<Transaction>, ApiError>> for TransactionsState {
    fn from(result: Result<Vec<Transaction>, ApiError>) -> Self {
        match result {
            Ok(items) => Self::Loaded(items),
            Err(e) => Self::Failed(e.to_string()),
        }
    }
}

/// Read the session and fetch transactions with it.
///
/// Without a stored token this fails with `ApiError::Auth` and the transport
/// is never touched.
///
/// # Errors
///
/// `Auth` when no token is stored, otherwise the client's `Fetch` failure.
pub async fn fetch_with_session<T: HttpTransport>(
    api: &ApiClient<T>,
    session: &Session,
) -> Result<Vec<Transaction>, ApiError> {
    let Some(token) = session.token() else {
        log::warn!("dashboard mounted without a session token");
        return Err(ApiError::Auth);
    };
    api.fetch_transactions(&token).await
}

/// One dashboard load: the settled state that replaces `Loading`.
pub async fn load_transactions<T: HttpTransport>(api: &ApiClient<T>, session: &Session) -> TransactionsState {
    let result = fetch_with_session(api, session).await;
    match &result {
        Ok(items) => log::info!("loaded {} transactions", items.len()),
        Err(e) => log::warn!("transaction load failed: {e}"),
    }
    result.into()
}

/// Render an amount as dollars with two decimals, sign first (`-$3.50`).
pub fn format_amount(amount: f64) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    format!("{sign}${:.2}", amount.abs())
}
