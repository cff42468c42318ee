//! Add/update forms for reminders.

#[cfg(test)]
#[path = "reminder_form_test.rs"]
mod reminder_form_test;

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};

use super::interview_form::parse_optional_application_id;
use crate::components::alert::{Alert, AlertKind};
use crate::components::nav_bar::NavBar;
use crate::state::session::Session;

fn validate_reminder_input(title: &str, remind_at: &str) -> Result<(), &'static str> {
    if title.trim().is_empty() || remind_at.trim().is_empty() {
        return Err("Title and remind time are required.");
    }
    Ok(())
}

#[cfg(any(test, feature = "hydrate"))]
fn build_reminder_payload(
    title: &str,
    remind_at: &str,
    application_id: Option<i64>,
    notes: &str,
) -> serde_json::Value {
    let mut map = serde_json::Map::new();
    map.insert("title".to_owned(), title.trim().into());
    map.insert("remindAt".to_owned(), remind_at.trim().into());
    if let Some(app_id) = application_id {
        map.insert("applicationId".to_owned(), app_id.into());
    }
    if !notes.trim().is_empty() {
        map.insert("notes".to_owned(), notes.trim().into());
    }
    serde_json::Value::Object(map)
}

#[component]
fn ReminderFields(
    title: RwSignal<String>,
    remind_at: RwSignal<String>,
    application_id: RwSignal<String>,
    notes: RwSignal<String>,
) -> impl IntoView {
    view! {
        <label class="form__label">
            "Title"
            <input
                class="form__input"
                type="text"
                prop:value=move || title.get()
                on:input=move |ev| title.set(event_target_value(&ev))
            />
        </label>
        <label class="form__label">
            "Remind at"
            <input
                class="form__input"
                type="datetime-local"
                prop:value=move || remind_at.get()
                on:input=move |ev| remind_at.set(event_target_value(&ev))
            />
        </label>
        <label class="form__label">
            "Application ID"
            <input
                class="form__input"
                type="text"
                placeholder="Optional"
                prop:value=move || application_id.get()
                on:input=move |ev| application_id.set(event_target_value(&ev))
            />
        </label>
        <label class="form__label">
            "Notes"
            <input
                class="form__input"
                type="text"
                prop:value=move || notes.get()
                on:input=move |ev| notes.set(event_target_value(&ev))
            />
        </label>
    }
}

#[component]
pub fn AddReminderPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let navigate = use_navigate();
    crate::util::auth::install_unauth_redirect(session, navigate.clone());

    let title = RwSignal::new(String::new());
    let remind_at = RwSignal::new(String::new());
    let application_id = RwSignal::new(String::new());
    let notes = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let success = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        if let Err(message) = validate_reminder_input(&title.get(), &remind_at.get()) {
            error.set(message.to_owned());
            return;
        }
        let linked = match parse_optional_application_id(&application_id.get()) {
            Ok(linked) => linked,
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
                let payload = build_reminder_payload(
                    &title.get_untracked(),
                    &remind_at.get_untracked(),
                    linked,
                    &notes.get_untracked(),
                );
                match crate::net::api::create_reminder(&payload).await {
                    Ok(_) => {
                        title.set(String::new());
                        remind_at.set(String::new());
                        application_id.set(String::new());
                        notes.set(String::new());
                        success.set("Reminder saved.".to_owned());
                        gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(
                            super::SUCCESS_DELAY_MS,
                        )))
                        .await;
                        navigate("/reminders", leptos_router::NavigateOptions::default());
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
            let _ = (linked, &navigate);
        }
    };

    view! {
        <div class="form-page">
            <NavBar/>
            <main class="form-page__body">
                <h1>"Add Reminder"</h1>
                <form class="form" on:submit=on_submit>
                    <ReminderFields
                        title=title
                        remind_at=remind_at
                        application_id=application_id
                        notes=notes
                    />
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        "Save"
                    </button>
                </form>
                <Alert kind=AlertKind::Error message=error/>
                <Alert kind=AlertKind::Success message=success/>
            </main>
        </div>
    }
}

#[component]
pub fn UpdateReminderPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let navigate = use_navigate();
    crate::util::auth::install_unauth_redirect(session, navigate.clone());

    let params = use_params_map();
    let record_id = RwSignal::new(None::<i64>);
    let title = RwSignal::new(String::new());
    let remind_at = RwSignal::new(String::new());
    let application_id = RwSignal::new(String::new());
    let notes = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let success = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    {
        let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let alive_effect = alive.clone();
        Effect::new(move || {
            let id = params.read().get("id").and_then(|v| v.parse::<i64>().ok());
            let alive_task = alive_effect.clone();
            leptos::task::spawn_local(async move {
                let Some(id) = id else {
                    error.set("Reminder not found.".to_owned());
                    return;
                };
                let fetched = crate::net::api::fetch_reminder(id).await;
                if !alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                    return;
                }
                match fetched {
                    Ok(record) => {
                        record_id.set(Some(record.id));
                        title.set(record.title);
                        remind_at.set(record.remind_at);
                        application_id
                            .set(record.application_id.map_or_else(String::new, |v| v.to_string()));
                        notes.set(record.notes.unwrap_or_default());
                    }
                    Err(message) => error.set(message),
                }
            });
        });
        on_cleanup(move || alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = &params;
    }

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let Some(id) = record_id.get() else {
            return;
        };
        if let Err(message) = validate_reminder_input(&title.get(), &remind_at.get()) {
            error.set(message.to_owned());
            return;
        }
        let linked = match parse_optional_application_id(&application_id.get()) {
            Ok(linked) => linked,
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
                let payload = build_reminder_payload(
                    &title.get_untracked(),
                    &remind_at.get_untracked(),
                    linked,
                    &notes.get_untracked(),
                );
                match crate::net::api::update_reminder(id, &payload).await {
                    Ok(_) => {
                        success.set("Reminder updated.".to_owned());
                        gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(
                            super::SUCCESS_DELAY_MS,
                        )))
                        .await;
                        navigate(
                            &format!("/reminders/{id}"),
                            leptos_router::NavigateOptions::default(),
                        );
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
            let _ = (id, linked, &navigate);
        }
    };

    view! {
        <div class="form-page">
            <NavBar/>
            <main class="form-page__body">
                <h1>"Update Reminder"</h1>
                <form class="form" on:submit=on_submit>
                    <ReminderFields
                        title=title
                        remind_at=remind_at
                        application_id=application_id
                        notes=notes
                    />
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
