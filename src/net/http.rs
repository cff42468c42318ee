//! HTTP request plumbing shared by every endpoint call.
//!
//! Client-side (hydrate): real fetch calls via `gloo-net`, each carrying the
//! persisted bearer token when one is present. Server-side (SSR): stubs
//! returning errors since these calls are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! No retry, no refresh-token flow, no response interception: failures
//! surface as `Err` strings to the calling screen. The stored token value is
//! parsed defensively; unreadable values mean the request simply goes out
//! unauthenticated.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use serde::de::DeserializeOwned;

use crate::util::storage;

/// Message returned by SSR stubs for browser-only calls.
#[cfg(not(feature = "hydrate"))]
pub(crate) const SERVER_STUB: &str = "not available on server";

/// HTTP verbs used by the JSON helpers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Post,
    Patch,
    Put,
}

/// Format the `Authorization` header value for a bearer token.
#[must_use]
pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Resolve the `Authorization` header from the persisted token, if any.
#[must_use]
pub fn auth_header() -> Option<String> {
    storage::load_token().map(|token| bearer(&token))
}

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(status: u16, body: &str) -> String {
    if body.is_empty() {
        format!("request failed: {status}")
    } else {
        format!("request failed: {status}: {body}")
    }
}

#[cfg(feature = "hydrate")]
fn with_auth(builder: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
    match auth_header() {
        Some(value) => builder.header("Authorization", &value),
        None => builder,
    }
}

#[cfg(feature = "hydrate")]
async fn fail_with_body(resp: gloo_net::http::Response) -> String {
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    request_failed_message(status, &body)
}

/// GET `path` and deserialize a JSON body.
///
/// # Errors
///
/// Returns an error string on transport failure, a non-OK status, or a body
/// that does not match `T`.
pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = with_auth(gloo_net::http::Request::get(path))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(fail_with_body(resp).await);
        }
        resp.json::<T>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
        Err(SERVER_STUB.to_owned())
    }
}

/// Send a JSON `body` to `path` with `method` semantics and deserialize the
/// response.
///
/// # Errors
///
/// Returns an error string on transport failure, a non-OK status, or a body
/// that does not match `T`.
pub async fn send_json<T: DeserializeOwned>(
    method: Method,
    path: &str,
    body: &serde_json::Value,
) -> Result<T, String> {
    #[cfg(feature = "hydrate")]
    {
        use gloo_net::http::Request;
        let builder = match method {
            Method::Post => Request::post(path),
            Method::Patch => Request::patch(path),
            Method::Put => Request::put(path),
        };
        let resp = with_auth(builder)
            .json(body)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(fail_with_body(resp).await);
        }
        resp.json::<T>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (method, path, body);
        Err(SERVER_STUB.to_owned())
    }
}

/// DELETE `path`, ignoring any response body.
///
/// # Errors
///
/// Returns an error string on transport failure or a non-OK status.
pub async fn delete(path: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = with_auth(gloo_net::http::Request::delete(path))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(fail_with_body(resp).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
        Err(SERVER_STUB.to_owned())
    }
}
