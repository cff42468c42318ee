//! Add/update forms for applications.
//!
//! Both forms validate required fields locally, submit, surface the outcome
//! as a banner, and navigate away after a short delay on success. Failures
//! re-enable the submit control with the typed input preserved.

#[cfg(test)]
#[path = "application_form_test.rs"]
mod application_form_test;

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::alert::{Alert, AlertKind};
use crate::components::nav_bar::NavBar;
use crate::state::session::Session;

fn validate_application_input(title: &str, company: &str) -> Result<(), &'static str> {
    if title.trim().is_empty() || company.trim().is_empty() {
        return Err("Title and company are required.");
    }
    Ok(())
}

/// Build the wire payload, sending only the fields the user filled in.
#[cfg(any(test, feature = "hydrate"))]
fn build_application_payload(
    title: &str,
    company: &str,
    status: &str,
    notes: &str,
    date_applied: &str,
) -> serde_json::Value {
    let mut map = serde_json::Map::new();
    map.insert("title".to_owned(), title.trim().into());
    map.insert("company".to_owned(), company.trim().into());
    if !status.trim().is_empty() {
        map.insert("status".to_owned(), status.trim().into());
    }
    if !notes.trim().is_empty() {
        map.insert("notes".to_owned(), notes.trim().into());
    }
    if !date_applied.trim().is_empty() {
        map.insert("dateApplied".to_owned(), date_applied.trim().into());
    }
    serde_json::Value::Object(map)
}

#[component]
fn ApplicationFields(
    title: RwSignal<String>,
    company: RwSignal<String>,
    status: RwSignal<String>,
    notes: RwSignal<String>,
    date_applied: RwSignal<String>,
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
            "Company"
            <input
                class="form__input"
                type="text"
                prop:value=move || company.get()
                on:input=move |ev| company.set(event_target_value(&ev))
            />
        </label>
        <label class="form__label">
            "Status"
            <input
                class="form__input"
                type="text"
                placeholder="applied / interviewing / offer"
                prop:value=move || status.get()
                on:input=move |ev| status.set(event_target_value(&ev))
            />
        </label>
        <label class="form__label">
            "Date applied"
            <input
                class="form__input"
                type="date"
                prop:value=move || date_applied.get()
                on:input=move |ev| date_applied.set(event_target_value(&ev))
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
pub fn AddApplicationPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let navigate = use_navigate();
    crate::util::auth::install_unauth_redirect(session, navigate.clone());

    let title = RwSignal::new(String::new());
    let company = RwSignal::new(String::new());
    let status = RwSignal::new(String::new());
    let notes = RwSignal::new(String::new());
    let date_applied = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let success = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        if let Err(message) = validate_application_input(&title.get(), &company.get()) {
            error.set(message.to_owned());
            return;
        }
        busy.set(true);
        error.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let payload = build_application_payload(
                    &title.get_untracked(),
                    &company.get_untracked(),
                    &status.get_untracked(),
                    &notes.get_untracked(),
                    &date_applied.get_untracked(),
                );
                match crate::net::api::create_application(&payload).await {
                    Ok(_) => {
                        title.set(String::new());
                        company.set(String::new());
                        status.set(String::new());
                        notes.set(String::new());
                        date_applied.set(String::new());
                        success.set("Application saved.".to_owned());
                        gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(
                            super::SUCCESS_DELAY_MS,
                        )))
                        .await;
                        navigate("/applications", leptos_router::NavigateOptions::default());
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
            let _ = &navigate;
        }
    };

    view! {
        <div class="form-page">
            <NavBar/>
            <main class="form-page__body">
                <h1>"New Application"</h1>
                <form class="form" on:submit=on_submit>
                    <ApplicationFields
                        title=title
                        company=company
                        status=status
                        notes=notes
                        date_applied=date_applied
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
pub fn UpdateApplicationPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let navigate = use_navigate();
    crate::util::auth::install_unauth_redirect(session, navigate.clone());

    let params = use_params_map();
    let record_id = RwSignal::new(None::<i64>);
    let title = RwSignal::new(String::new());
    let company = RwSignal::new(String::new());
    let status = RwSignal::new(String::new());
    let notes = RwSignal::new(String::new());
    let date_applied = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let success = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    // Prefill from the existing record.
    #[cfg(feature = "hydrate")]
    {
        let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let alive_effect = alive.clone();
        Effect::new(move || {
            let id = params.read().get("id").and_then(|v| v.parse::<i64>().ok());
            let alive_task = alive_effect.clone();
            leptos::task::spawn_local(async move {
                let Some(id) = id else {
                    error.set("Application not found.".to_owned());
                    return;
                };
                let fetched = crate::net::api::fetch_application(id).await;
                if !alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                    return;
                }
                match fetched {
                    Ok(app) => {
                        record_id.set(Some(app.id));
                        title.set(app.title);
                        company.set(app.company);
                        status.set(app.status.unwrap_or_default());
                        notes.set(app.notes.unwrap_or_default());
                        date_applied.set(app.date_applied.unwrap_or_default());
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
        if let Err(message) = validate_application_input(&title.get(), &company.get()) {
            error.set(message.to_owned());
            return;
        }
        busy.set(true);
        error.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let payload = build_application_payload(
                    &title.get_untracked(),
                    &company.get_untracked(),
                    &status.get_untracked(),
                    &notes.get_untracked(),
                    &date_applied.get_untracked(),
                );
                match crate::net::api::update_application(id, &payload).await {
                    Ok(_) => {
                        success.set("Application updated.".to_owned());
                        gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(
                            super::SUCCESS_DELAY_MS,
                        )))
                        .await;
                        navigate(
                            &format!("/applications/{id}"),
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
            let _ = (id, &navigate);
        }
    };

    view! {
        <div class="form-page">
            <NavBar/>
            <main class="form-page__body">
                <h1>"Update Application"</h1>
                <form class="form" on:submit=on_submit>
                    <ApplicationFields
                        title=title
                        company=company
                        status=status
                        notes=notes
                        date_applied=date_applied
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
