use futures::executor::block_on;

use super::*;
use crate::net::error::{CONNECTIVITY_MESSAGE, TransportError};
use crate::net::testing::{RecordedCall, ScriptedTransport, html_response};

const BASE: &str = "http://api.test";

fn client(transport: ScriptedTransport) -> ApiClient<ScriptedTransport> {
    ApiClient::new(BASE, transport)
}

// =============================================================
// helpers
// =============================================================

#[test]
fn endpoint_joins_base_and_path() {
    assert_eq!(endpoint("http://api.test", "/user/signin"), "http://api.test/user/signin");
    assert_eq!(endpoint("http://api.test/", "/transactions"), "http://api.test/transactions");
}

#[test]
fn json_content_type_detection() {
    assert!(is_json_content_type(Some("application/json")));
    assert!(is_json_content_type(Some("Application/JSON; charset=utf-8")));
    assert!(!is_json_content_type(Some("text/html")));
    assert!(!is_json_content_type(None));
}

// =============================================================
// signin / signup
// =============================================================

#[test]
fn signin_posts_credentials_and_returns_body() {
    let api = client(ScriptedTransport::new().json(200, r#"{"token":"tok-1"}"#));
    let creds = Credentials::signin("a@b.com", "secret");

    let resp = block_on(api.signin(&creds)).unwrap();

    assert_eq!(resp.token.as_deref(), Some("tok-1"));
    assert_eq!(
        api.transport().calls(),
        vec![RecordedCall::Post {
            url: "http://api.test/user/signin".to_owned(),
            body: serde_json::json!({ "username": "a@b.com", "password": "secret" }),
        }]
    );
}

#[test]
fn signup_posts_name_to_signup_path() {
    let api = client(ScriptedTransport::new().json(201, r#"{"token":"tok-2","message":"created"}"#));
    let creds = Credentials::signup("a@b.com", "Alice", "secret");

    let resp = block_on(api.signup(&creds)).unwrap();

    assert_eq!(resp.token.as_deref(), Some("tok-2"));
    let calls = api.transport().calls();
    assert_eq!(calls.len(), 1);
    let RecordedCall::Post { url, body } = &calls[0] else {
        panic!("expected POST");
    };
    assert_eq!(url, "http://api.test/user/signup");
    assert_eq!(body["name"], "Alice");
}

#[test]
fn signin_rejection_surfaces_backend_message() {
    let api = client(ScriptedTransport::new().json(401, r#"{"message":"Invalid password"}"#));
    let err = block_on(api.signin(&Credentials::signin("a@b.com", "nope"))).unwrap_err();
    assert_eq!(err, ApiError::Request("Invalid password".to_owned()));
    assert_eq!(err.to_string(), "Invalid password");
}

#[test]
fn signin_rejection_without_message_uses_fallback() {
    let api = client(ScriptedTransport::new().json(400, r"{}"));
    let err = block_on(api.signin(&Credentials::signin("a@b.com", "x"))).unwrap_err();
    assert_eq!(err, ApiError::Request("Sign in failed".to_owned()));
}

#[test]
fn signup_rejection_without_message_uses_fallback() {
    let api = client(ScriptedTransport::new().json(409, r#"{"message":""}"#));
    let err = block_on(api.signup(&Credentials::signup("a@b.com", "Al", "secret"))).unwrap_err();
    assert_eq!(err, ApiError::Request("Signup failed".to_owned()));
}

#[test]
fn non_json_reply_is_connectivity_error_for_both_calls_regardless_of_status() {
    for status in [200, 404, 502] {
        let api = client(
            ScriptedTransport::new()
                .with_response(Ok(html_response(status, "<html>oops</html>")))
                .with_response(Ok(html_response(status, "<html>oops</html>"))),
        );
        let signin = block_on(api.signin(&Credentials::signin("a@b.com", "x"))).unwrap_err();
        let signup = block_on(api.signup(&Credentials::signup("a@b.com", "Al", "secret"))).unwrap_err();
        assert_eq!(signin, ApiError::Connectivity);
        assert_eq!(signup, ApiError::Connectivity);
        assert_eq!(signin.to_string(), CONNECTIVITY_MESSAGE);
    }
}

#[test]
fn missing_content_type_is_connectivity_error() {
    let api = client(ScriptedTransport::new().with_response(Ok(HttpResponse {
        status: 200,
        content_type: None,
        body: r#"{"token":"t"}"#.to_owned(),
    })));
    let err = block_on(api.signin(&Credentials::signin("a@b.com", "x"))).unwrap_err();
    assert_eq!(err, ApiError::Connectivity);
}

#[test]
fn unreachable_backend_is_connectivity_error() {
    let api = client(ScriptedTransport::new().with_response(Err(TransportError("refused".to_owned()))));
    let err = block_on(api.signin(&Credentials::signin("a@b.com", "x"))).unwrap_err();
    assert_eq!(err, ApiError::Connectivity);
}

#[test]
fn malformed_json_body_is_connectivity_error() {
    let api = client(ScriptedTransport::new().json(200, "{not json"));
    let err = block_on(api.signup(&Credentials::signup("a@b.com", "Al", "secret"))).unwrap_err();
    assert_eq!(err, ApiError::Connectivity);
}

// =============================================================
// transactions
// =============================================================

#[test]
fn fetch_transactions_sends_bearer_token() {
    let api = client(ScriptedTransport::new().json(200, "[]"));
    let list = block_on(api.fetch_transactions("tok-9")).unwrap();
    assert!(list.is_empty());
    assert_eq!(
        api.transport().calls(),
        vec![RecordedCall::Get { url: "http://api.test/transactions".to_owned(), token: "tok-9".to_owned() }]
    );
}

#[test]
fn fetch_transactions_preserves_order() {
    let api = client(ScriptedTransport::new().json(
        200,
        r#"[{"id":"1","description":"Coffee","amount":-3.5},{"id":"2","description":"Salary","amount":2500}]"#,
    ));
    let list = block_on(api.fetch_transactions("tok")).unwrap();
    let descriptions: Vec<_> = list.iter().map(|t| t.description.as_str()).collect();
    assert_eq!(descriptions, ["Coffee", "Salary"]);
}

#[test]
fn fetch_transactions_prefers_backend_message_on_rejection() {
    let api = client(ScriptedTransport::new().json(401, r#"{"message":"Token expired"}"#));
    let err = block_on(api.fetch_transactions("tok")).unwrap_err();
    assert_eq!(err, ApiError::Fetch("Token expired".to_owned()));
}

#[test]
fn fetch_transactions_network_error_uses_generic_message() {
    let api = client(ScriptedTransport::new().with_response(Err(TransportError("offline".to_owned()))));
    let err = block_on(api.fetch_transactions("tok")).unwrap_err();
    assert_eq!(err, ApiError::Fetch(FETCH_FAILED_MESSAGE.to_owned()));
}

#[test]
fn fetch_transactions_undecodable_body_uses_generic_message() {
    let api = client(ScriptedTransport::new().json(200, r#"{"items":[]}"#));
    let err = block_on(api.fetch_transactions("tok")).unwrap_err();
    assert_eq!(err, ApiError::Fetch(FETCH_FAILED_MESSAGE.to_owned()));
}
