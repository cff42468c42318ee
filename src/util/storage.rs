//! Browser localStorage helpers for persisted client state.
//!
//! SYSTEM CONTEXT
//! ==============
//! These helpers centralize hydrate-only read/write behavior so the session
//! store, the HTTP wrapper, and the calendar screens can share one storage
//! layer without repeating web-sys glue. SSR paths safely report absent
//! values and ignore writes.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use serde::Serialize;

/// Storage key holding the session token envelope.
pub const TOKEN_KEY: &str = "job_jotter_token";
/// Storage key holding the calendar provider access token.
pub const GOOGLE_ACCESS_TOKEN_KEY: &str = "google_access_token";
/// Storage key holding the calendar provider refresh token.
pub const GOOGLE_REFRESH_TOKEN_KEY: &str = "google_refresh_token";

/// Canonical persisted shape of the session token.
#[derive(Debug, Serialize, serde::Deserialize)]
pub struct TokenEnvelope {
    pub token: String,
}

/// Parse a raw storage value into a token, tolerating legacy layouts.
///
/// The canonical shape is the JSON envelope `{"token": "..."}`. Older code
/// paths stored the bare token string (sometimes JSON-quoted); those are
/// accepted on read. Anything else is treated as no token.
#[must_use]
pub fn parse_stored_token(raw: &str) -> Option<String> {
    if let Ok(envelope) = serde_json::from_str::<TokenEnvelope>(raw) {
        if envelope.token.is_empty() {
            return None;
        }
        return Some(envelope.token);
    }
    if let Ok(serde_json::Value::String(token)) = serde_json::from_str(raw) {
        if token.is_empty() {
            return None;
        }
        return Some(token);
    }
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.starts_with('{') {
        None
    } else {
        Some(trimmed.to_owned())
    }
}

/// Read the persisted session token, if any.
#[must_use]
pub fn load_token() -> Option<String> {
    load_raw(TOKEN_KEY).as_deref().and_then(parse_stored_token)
}

/// Persist a session token in the canonical envelope shape.
pub fn save_token(token: &str) {
    save_json(
        TOKEN_KEY,
        &TokenEnvelope {
            token: token.to_owned(),
        },
    );
}

/// Remove the persisted session token.
pub fn clear_token() {
    remove(TOKEN_KEY);
}

/// Load a raw string value from `localStorage` for `key`.
#[must_use]
pub fn load_raw(key: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        storage.get_item(key).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

/// Save a raw string value to `localStorage` for `key`.
pub fn save_raw(key: &str, value: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return;
        };
        let _ = storage.set_item(key, value);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, value);
    }
}

/// Save a JSON value to `localStorage` for `key`.
pub fn save_json<T: Serialize>(key: &str, value: &T) {
    let Ok(raw) = serde_json::to_string(value) else {
        return;
    };
    save_raw(key, &raw);
}

/// Remove the value stored under `key`.
pub fn remove(key: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return;
        };
        let _ = storage.remove_item(key);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
    }
}
