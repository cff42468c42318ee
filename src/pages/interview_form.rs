//! Add/update forms for interviews.

#[cfg(test)]
#[path = "interview_form_test.rs"]
mod interview_form_test;

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::alert::{Alert, AlertKind};
use crate::components::nav_bar::NavBar;
use crate::state::session::Session;

fn validate_interview_input(round: &str, scheduled_at: &str) -> Result<(), &'static str> {
    if round.trim().is_empty() || scheduled_at.trim().is_empty() {
        return Err("Round and scheduled time are required.");
    }
    Ok(())
}

/// Parse the optional application-id field: empty means unlinked, anything
/// else must be a number.
pub(crate) fn parse_optional_application_id(raw: &str) -> Result<Option<i64>, &'static str> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    raw.parse::<i64>()
        .map(Some)
        .map_err(|_| "Application ID must be a number.")
}

#[cfg(any(test, feature = "hydrate"))]
fn build_interview_payload(
    round: &str,
    scheduled_at: &str,
    application_id: Option<i64>,
    location: &str,
    notes: &str,
) -> serde_json::Value {
    let mut map = serde_json::Map::new();
    map.insert("round".to_owned(), round.trim().into());
    map.insert("scheduledAt".to_owned(), scheduled_at.trim().into());
    if let Some(app_id) = application_id {
        map.insert("applicationId".to_owned(), app_id.into());
    }
    if !location.trim().is_empty() {
        map.insert("location".to_owned(), location.trim().into());
    }
    if !notes.trim().is_empty() {
        map.insert("notes".to_owned(), notes.trim().into());
    }
    serde_json::Value::Object(map)
}

#[component]
fn InterviewFields(
    round: RwSignal<String>,
    scheduled_at: RwSignal<String>,
    application_id: RwSignal<String>,
    location: RwSignal<String>,
    notes: RwSignal<String>,
) -> impl IntoView {
    view! {
        <label class="form__label">
            "Round"
            <input
                class="form__input"
                type="text"
                placeholder="Phone screen / Onsite"
                prop:value=move || round.get()
                on:input=move |ev| round.set(event_target_value(&ev))
            />
        </label>
        <label class="form__label">
            "Scheduled"
            <input
                class="form__input"
                type="datetime-local"
                prop:value=move || scheduled_at.get()
                on:input=move |ev| scheduled_at.set(event_target_value(&ev))
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
            "Location"
            <input
                class="form__input"
                type="text"
                placeholder="Optional"
                prop:value=move || location.get()
                on:input=move |ev| location.set(event_target_value(&ev))
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
pub fn AddInterviewPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let navigate = use_navigate();
    crate::util::auth::install_unauth_redirect(session, navigate.clone());

    let round = RwSignal::new(String::new());
    let scheduled_at = RwSignal::new(String::new());
    let application_id = RwSignal::new(String::new());
    let location = RwSignal::new(String::new());
    let notes = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let success = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        if let Err(message) = validate_interview_input(&round.get(), &scheduled_at.get()) {
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
                let payload = build_interview_payload(
                    &round.get_untracked(),
                    &scheduled_at.get_untracked(),
                    linked,
                    &location.get_untracked(),
                    &notes.get_untracked(),
                );
                match crate::net::api::create_interview(&payload).await {
                    Ok(_) => {
                        round.set(String::new());
                        scheduled_at.set(String::new());
                        application_id.set(String::new());
                        location.set(String::new());
                        notes.set(String::new());
                        success.set("Interview saved.".to_owned());
                        gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(
                            super::SUCCESS_DELAY_MS,
                        )))
                        .await;
                        navigate("/interviews", leptos_router::NavigateOptions::default());
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
                <h1>"Add Interview"</h1>
                <form class="form" on:submit=on_submit>
                    <InterviewFields
                        round=round
                        scheduled_at=scheduled_at
                        application_id=application_id
                        location=location
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
pub fn UpdateInterviewPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let navigate = use_navigate();
    crate::util::auth::install_unauth_redirect(session, navigate.clone());

    let params = use_params_map();
    let record_id = RwSignal::new(None::<i64>);
    let round = RwSignal::new(String::new());
    let scheduled_at = RwSignal::new(String::new());
    let application_id = RwSignal::new(String::new());
    let location = RwSignal::new(String::new());
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
                    error.set("Interview not found.".to_owned());
                    return;
                };
                let fetched = crate::net::api::fetch_interview(id).await;
                if !alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                    return;
                }
                match fetched {
                    Ok(record) => {
                        record_id.set(Some(record.id));
                        round.set(record.round);
                        scheduled_at.set(record.scheduled_at);
                        application_id
                            .set(record.application_id.map_or_else(String::new, |v| v.to_string()));
                        location.set(record.location.unwrap_or_default());
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
        if let Err(message) = validate_interview_input(&round.get(), &scheduled_at.get()) {
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
                let payload = build_interview_payload(
                    &round.get_untracked(),
                    &scheduled_at.get_untracked(),
                    linked,
                    &location.get_untracked(),
                    &notes.get_untracked(),
                );
                match crate::net::api::update_interview(id, &payload).await {
                    Ok(_) => {
                        success.set("Interview updated.".to_owned());
                        gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(
                            super::SUCCESS_DELAY_MS,
                        )))
                        .await;
                        navigate(
                            &format!("/interviews/{id}"),
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
                <h1>"Update Interview"</h1>
                <form class="form" on:submit=on_submit>
                    <InterviewFields
                        round=round
                        scheduled_at=scheduled_at
                        application_id=application_id
                        location=location
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
