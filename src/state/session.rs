//! Session state and the injectable session store.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and user-aware components to coordinate login
//! redirects and identity-dependent rendering. The token signal is the
//! single trigger for the bootstrap effect installed at the app root.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::net::types::User;
use crate::util::storage;

/// Snapshot of the authenticated session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionState {
    pub user: Option<User>,
    pub loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        // Loading until the first bootstrap pass resolves the stored token,
        // so guards do not redirect before the user fetch settles.
        Self {
            user: None,
            loading: true,
        }
    }
}

impl SessionState {
    /// Resolved logged-out state used after logout and bootstrap failures.
    #[must_use]
    pub fn logged_out() -> Self {
        Self {
            user: None,
            loading: false,
        }
    }

    /// Resolved logged-in state for a fetched user.
    #[must_use]
    pub fn logged_in(user: User) -> Self {
        Self {
            user: Some(user),
            loading: false,
        }
    }
}

/// Injectable session store shared through context.
#[derive(Clone, Copy)]
pub struct Session {
    /// Current token value; mutated only by login, signup, and logout.
    pub token: RwSignal<Option<String>>,
    /// Bootstrap outcome consumed by guards and components.
    pub state: RwSignal<SessionState>,
}

impl Session {
    /// Create a store seeded from the persisted token, if any.
    #[must_use]
    pub fn new() -> Self {
        Self {
            token: RwSignal::new(storage::load_token()),
            state: RwSignal::new(SessionState::default()),
        }
    }

    /// Current user snapshot.
    #[must_use]
    pub fn user(&self) -> Option<User> {
        self.state.get().user
    }

    /// Persist a fresh token and let the bootstrap effect resolve the
    /// matching user.
    pub fn set_token(&self, token: &str) {
        storage::save_token(token);
        self.state.set(SessionState::default());
        self.token.set(Some(token.to_owned()));
    }

    /// Clear both the persisted token and the in-memory user.
    pub fn logout(&self) {
        storage::clear_token();
        self.state.set(SessionState::logged_out());
        self.token.set(None);
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolve a token value to a session snapshot.
///
/// Decode failures and user-fetch rejections both degrade to the logged-out
/// snapshot; this function never fails.
pub async fn bootstrap(token: Option<String>) -> SessionState {
    let Some(token) = token else {
        return SessionState::logged_out();
    };

    let username = match crate::util::token::decode_username(&token) {
        Ok(name) => name,
        Err(err) => {
            #[cfg(feature = "hydrate")]
            log::warn!("session token rejected: {err}");
            #[cfg(not(feature = "hydrate"))]
            let _ = err;
            return SessionState::logged_out();
        }
    };

    match crate::net::api::fetch_user(&username).await {
        Ok(user) => SessionState::logged_in(user),
        Err(err) => {
            #[cfg(feature = "hydrate")]
            log::error!("user bootstrap failed for {username}: {err}");
            #[cfg(not(feature = "hydrate"))]
            let _ = err;
            SessionState::logged_out()
        }
    }
}
