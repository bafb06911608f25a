//! HTTP transport seam used by the API client.
//!
//! Client-side (hydrate): `BrowserTransport` issues real requests via `gloo-net`.
//! Server-side (SSR): `BrowserTransport` fails every call since these endpoints
//! are only reached from the browser.
//!
//! Tests implement `HttpTransport` with scripted responses.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use super::error::TransportError;

/// Raw response as seen by the API client before interpretation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    /// Value of the `Content-Type` header, if the server sent one.
    pub content_type: Option<String>,
    pub body: String,
}

impl HttpResponse {
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Minimal request surface the budget API needs.
///
/// Futures are not `Send`; they run on the single browser thread.
#[allow(async_fn_in_trait)]
pub trait HttpTransport {
    /// POST `body` as JSON with `Content-Type` and `Accept` set to `application/json`.
    async fn post_json(&self, url: &str, body: &serde_json::Value) -> Result<HttpResponse, TransportError>;

    /// GET with `Authorization: Bearer <token>` and `Accept: application/json`.
    async fn get_authorized(&self, url: &str, token: &str) -> Result<HttpResponse, TransportError>;
}

/// `gloo-net` backed transport for the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTransport;

impl HttpTransport for BrowserTransport {
    async fn post_json(&self, url: &str, body: &serde_json::Value) -> Result<HttpResponse, TransportError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(url)
                .header("Accept", "application/json")
                .json(body)
                .map_err(|e| TransportError(e.to_string()))?
                .send()
                .await
                .map_err(|e| TransportError(e.to_string()))?;
            read_response(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (url, body);
            Err(TransportError("not available on server".to_owned()))
        }
    }

    async fn get_authorized(&self, url: &str, token: &str) -> Result<HttpResponse, TransportError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::get(url)
                .header("Accept", "application/json")
                .header("Authorization", &bearer_header(token))
                .send()
                .await
                .map_err(|e| TransportError(e.to_string()))?;
            read_response(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (url, token);
            Err(TransportError("not available on server".to_owned()))
        }
    }
}

#[cfg(feature = "hydrate")]
async fn read_response(resp: gloo_net::http::Response) -> Result<HttpResponse, TransportError> {
    let status = resp.status();
    let content_type = resp.headers().get("content-type");
    let body = resp.text().await.map_err(|e| TransportError(e.to_string()))?;
    Ok(HttpResponse { status, content_type, body })
}

/// `Authorization` header value for a bearer token.
pub fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}
