//! Signup page registering a new account.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::alert::{Alert, AlertKind};
use crate::state::session::Session;

/// Validated registration fields.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct SignupInput {
    pub username: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

fn validate_signup_input(
    username: &str,
    password: &str,
    first_name: &str,
    last_name: &str,
    email: &str,
) -> Result<SignupInput, &'static str> {
    let username = username.trim();
    let first_name = first_name.trim();
    let last_name = last_name.trim();
    let email = email.trim();
    if username.is_empty()
        || password.is_empty()
        || first_name.is_empty()
        || last_name.is_empty()
        || email.is_empty()
    {
        return Err("All fields are required.");
    }
    Ok(SignupInput {
        username: username.to_owned(),
        password: password.to_owned(),
        first_name: first_name.to_owned(),
        last_name: last_name.to_owned(),
        email: email.to_owned(),
    })
}

#[cfg(any(test, feature = "hydrate"))]
fn build_register_payload(input: &SignupInput) -> serde_json::Value {
    serde_json::json!({
        "username": input.username,
        "password": input.password,
        "firstName": input.first_name,
        "lastName": input.last_name,
        "email": input.email,
    })
}

/// Map backend constraint-violation text to a friendly message.
#[cfg(any(test, feature = "hydrate"))]
fn map_register_error(raw: &str) -> String {
    if raw.contains("users_email_key") {
        "That email is already registered.".to_owned()
    } else if raw.contains("users_username_key") {
        "That username is taken.".to_owned()
    } else {
        "Sign up failed. Please try again.".to_owned()
    }
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let input = match validate_signup_input(
            &username.get(),
            &password.get(),
            &first_name.get(),
            &last_name.get(),
            &email.get(),
        ) {
            Ok(input) => input,
            Err(message) => {
                error.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        error.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let payload = build_register_payload(&input);
                match crate::net::api::register(&payload).await {
                    Ok(token) => {
                        session.set_token(&token);
                        navigate("/dashboard", leptos_router::NavigateOptions::default());
                    }
                    Err(raw) => {
                        error.set(map_register_error(&raw));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (input, &navigate);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Job Jotter"</h1>
                <p class="auth-card__subtitle">"Sign Up"</p>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="text"
                        placeholder="Username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="text"
                        placeholder="First name"
                        prop:value=move || first_name.get()
                        on:input=move |ev| first_name.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="text"
                        placeholder="Last name"
                        prop:value=move || last_name.get()
                        on:input=move |ev| last_name.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="email"
                        placeholder="Email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        "Create Account"
                    </button>
                </form>
                <Alert kind=AlertKind::Error message=error/>
                <p class="auth-card__switch">
                    "Already registered? " <a href="/login">"Log in"</a>
                </p>
            </div>
        </div>
    }
}
