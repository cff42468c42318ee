//! Public landing page and the catch-all redirect target.

use leptos::prelude::*;

use crate::state::session::Session;

#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<Session>();
    let logged_in = move || session.state.get().user.is_some();

    view! {
        <div class="home-page">
            <div class="home-page__card">
                <h1>"Job Jotter"</h1>
                <p class="home-page__tagline">
                    "Track applications, interviews, and reminders in one place."
                </p>
                <Show
                    when=logged_in
                    fallback=|| {
                        view! {
                            <div class="home-page__actions">
                                <a class="btn btn--primary" href="/login">
                                    "Log In"
                                </a>
                                <a class="btn" href="/signup">
                                    "Sign Up"
                                </a>
                            </div>
                        }
                    }
                >
                    <a class="btn btn--primary" href="/dashboard">
                        "Go to Dashboard"
                    </a>
                </Show>
            </div>
        </div>
    }
}

/// Fallback for unknown routes: land back on the home page, replacing the
/// bogus history entry.
#[component]
pub fn NotFoundRedirect() -> impl IntoView {
    let navigate = leptos_router::hooks::use_navigate();
    Effect::new(move || {
        navigate(
            "/",
            leptos_router::NavigateOptions {
                replace: true,
                ..leptos_router::NavigateOptions::default()
            },
        );
    });

    view! { <p class="home-page__redirect">"Redirecting..."</p> }
}
