use futures::executor::block_on;

use super::*;
use crate::net::error::{FETCH_FAILED_MESSAGE, NO_TOKEN_MESSAGE, TransportError};
use crate::net::testing::{RecordedCall, ScriptedTransport};

fn api(transport: ScriptedTransport) -> ApiClient<ScriptedTransport> {
    ApiClient::new("http://api.test", transport)
}

fn signed_in(token: &str) -> Session {
    let session = Session::in_memory();
    session.set_token(token);
    session
}

// =============================================================
// state
// =============================================================

#[test]
fn default_state_is_loading() {
    assert_eq!(TransactionsState::default(), TransactionsState::Loading);
}

#[test]
fn failed_result_carries_error_message() {
    let state = TransactionsState::from(Err(ApiError::Fetch("boom".to_owned())));
    assert_eq!(state, TransactionsState::Failed("boom".to_owned()));
}

// =============================================================
// load flow
// =============================================================

#[test]
fn missing_token_fails_without_network_call() {
    let api = api(ScriptedTransport::new().json(200, "[]"));
    let session = Session::in_memory();

    let state = block_on(load_transactions(&api, &session));

    assert_eq!(state, TransactionsState::Failed(NO_TOKEN_MESSAGE.to_owned()));
    assert!(api.transport().calls().is_empty());
}

#[test]
fn empty_list_settles_in_loaded_empty_state() {
    let api = api(ScriptedTransport::new().json(200, "[]"));

    let state = block_on(load_transactions(&api, &signed_in("tok")));

    assert_eq!(state, TransactionsState::Loaded(Vec::new()));
}

#[test]
fn loaded_list_uses_stored_token_once() {
    let api = api(ScriptedTransport::new().json(200, r#"[{"id":"1","description":"Rent","amount":-950}]"#));

    let state = block_on(load_transactions(&api, &signed_in("tok-7")));

    let TransactionsState::Loaded(items) = &state else {
        panic!("expected loaded state");
    };
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].description, "Rent");
    assert_eq!(
        api.transport().calls(),
        vec![RecordedCall::Get { url: "http://api.test/transactions".to_owned(), token: "tok-7".to_owned() }]
    );
}

#[test]
fn network_error_settles_in_failed_with_message() {
    let api = api(ScriptedTransport::new().with_response(Err(TransportError("offline".to_owned()))));

    let state = block_on(load_transactions(&api, &signed_in("tok")));

    let TransactionsState::Failed(message) = state else {
        panic!("expected failed state");
    };
    assert!(!message.is_empty());
    assert_eq!(message, FETCH_FAILED_MESSAGE);
}

#[test]
fn backend_message_is_preferred_on_failure() {
    let api = api(ScriptedTransport::new().json(403, r#"{"message":"Session revoked"}"#));

    let state = block_on(load_transactions(&api, &signed_in("tok")));

    assert_eq!(state, TransactionsState::Failed("Session revoked".to_owned()));
}

#[test]
fn fetch_with_session_reports_auth_error_kind() {
    let api = api(ScriptedTransport::new());
    let err = block_on(fetch_with_session(&api, &Session::in_memory())).unwrap_err();
    assert_eq!(err, ApiError::Auth);
}

// =============================================================
// formatting
// =============================================================

#[test]
fn format_amount_renders_two_decimals_with_sign() {
    assert_eq!(format_amount(12.5), "$12.50");
    assert_eq!(format_amount(-3.0), "-$3.00");
    assert_eq!(format_amount(0.0), "$0.00");
    assert_eq!(format_amount(1234.567), "$1234.57");
}
