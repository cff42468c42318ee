//! Shared route-guard helper.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected route applies identical unauthenticated redirect behavior.

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::Session;

/// Redirect to `/login` whenever the session has finished loading and no
/// user is present.
///
/// The redirect replaces the current history entry so back-navigation does
/// not loop through the guarded page.
pub fn install_unauth_redirect<F>(session: Session, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let state = session.state.get();
        if !state.loading && state.user.is_none() {
            navigate(
                "/login",
                NavigateOptions {
                    replace: true,
                    ..NavigateOptions::default()
                },
            );
        }
    });
}
