//! Top navigation chrome for authenticated screens.

use leptos::prelude::*;

use crate::state::session::Session;
use crate::state::ui::UiState;

/// Navigation bar with section links, the signed-in username, a dark-mode
/// toggle, and logout.
#[component]
pub fn NavBar() -> impl IntoView {
    let session = expect_context::<Session>();
    let ui = expect_context::<RwSignal<UiState>>();

    let username = move || {
        session
            .state
            .get()
            .user
            .map_or_else(String::new, |u| u.username)
    };

    let on_logout = move |_| {
        session.logout();
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href("/login");
            }
        }
    };

    view! {
        <header class="nav-bar toolbar">
            <a class="nav-bar__brand" href="/dashboard">
                "Job Jotter"
            </a>
            <nav class="nav-bar__links">
                <a href="/applications">"Applications"</a>
                <a href="/interviews">"Interviews"</a>
                <a href="/reminders">"Reminders"</a>
                <a href="/google-calendar/events">"Calendar"</a>
                <a href="/profile">"Profile"</a>
            </nav>

            <span class="toolbar__spacer"></span>

            <button
                class="btn toolbar__dark-toggle"
                on:click=move |_| {
                    let current = ui.get().dark_mode;
                    let next = crate::util::dark_mode::toggle(current);
                    ui.update(|u| u.dark_mode = next);
                }
                title="Toggle dark mode"
            >
                {move || if ui.get().dark_mode { "☀" } else { "☾" }}
            </button>

            <span class="nav-bar__self">{username}</span>

            <button class="btn nav-bar__logout" on:click=on_logout title="Logout">
                "Logout"
            </button>
        </header>
    }
}
