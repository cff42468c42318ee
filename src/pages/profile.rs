//! Profile screen showing and editing the signed-in user.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::alert::{Alert, AlertKind};
use crate::components::nav_bar::NavBar;
use crate::state::session::Session;

fn validate_profile_input(
    first_name: &str,
    last_name: &str,
    email: &str,
) -> Result<(), &'static str> {
    if first_name.trim().is_empty() || last_name.trim().is_empty() || email.trim().is_empty() {
        return Err("First name, last name, and email are required.");
    }
    Ok(())
}

#[cfg(any(test, feature = "hydrate"))]
fn build_profile_payload(first_name: &str, last_name: &str, email: &str) -> serde_json::Value {
    serde_json::json!({
        "firstName": first_name.trim(),
        "lastName": last_name.trim(),
        "email": email.trim(),
    })
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = expect_context::<Session>();
    let navigate = use_navigate();
    crate::util::auth::install_unauth_redirect(session, navigate);

    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let success = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    // Prefill from the session user once the bootstrap settles.
    Effect::new(move || {
        if let Some(user) = session.state.get().user {
            first_name.set(user.first_name);
            last_name.set(user.last_name);
            email.set(user.email);
        }
    });

    let username = move || {
        session
            .state
            .get()
            .user
            .map_or_else(String::new, |u| u.username)
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let Some(user) = session.state.get_untracked().user else {
            return;
        };
        if let Err(message) =
            validate_profile_input(&first_name.get(), &last_name.get(), &email.get())
        {
            error.set(message.to_owned());
            return;
        }
        busy.set(true);
        error.set(String::new());
        success.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                let payload = build_profile_payload(
                    &first_name.get_untracked(),
                    &last_name.get_untracked(),
                    &email.get_untracked(),
                );
                match crate::net::api::update_user(&user.username, &payload).await {
                    Ok(updated) => {
                        session
                            .state
                            .set(crate::state::session::SessionState::logged_in(updated));
                        success.set("Profile updated.".to_owned());
                        busy.set(false);
                    }
                    Err(message) => {
                        error.set(message);
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = user;
        }
    };

    view! {
        <div class="form-page profile-page">
            <NavBar/>
            <main class="form-page__body">
                <h1>"Profile"</h1>
                <p class="profile-page__username">{username}</p>
                <form class="form" on:submit=on_submit>
                    <label class="form__label">
                        "First name"
                        <input
                            class="form__input"
                            type="text"
                            prop:value=move || first_name.get()
                            on:input=move |ev| first_name.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="form__label">
                        "Last name"
                        <input
                            class="form__input"
                            type="text"
                            prop:value=move || last_name.get()
                            on:input=move |ev| last_name.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="form__label">
                        "Email"
                        <input
                            class="form__input"
                            type="email"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        "Save Changes"
                    </button>
                </form>
                <Alert kind=AlertKind::Error message=error/>
                <Alert kind=AlertKind::Success message=success/>
            </main>
        </div>
    }
}
