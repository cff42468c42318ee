//! Calendar events screen backed by the Google Calendar proxy.
//!
//! SYSTEM CONTEXT
//! ==============
//! Lists proxied events in their normalized display shape and funnels
//! create/edit/delete through one modal dialog. Returning from the provider
//! consent page with `?code=...` triggers the token exchange, persists the
//! returned tokens, and strips the query from the address bar before the
//! event fetch runs.

#[cfg(test)]
#[path = "calendar_test.rs"]
mod calendar_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::event_dialog::EventDialog;
use crate::components::nav_bar::NavBar;
use crate::net::types::{CalendarEvent, EventWindow};
use crate::state::list::ListState;
use crate::state::session::Session;
#[cfg(feature = "hydrate")]
use crate::util::storage;

/// Pull the `code` parameter out of a location query string.
#[cfg(any(test, feature = "hydrate"))]
fn extract_oauth_code(search: &str) -> Option<String> {
    let query = search.strip_prefix('?').unwrap_or(search);
    for pair in query.split('&') {
        if let Some(value) = pair.strip_prefix("code=") {
            if !value.is_empty() {
                return Some(value.to_owned());
            }
        }
    }
    None
}

/// Widen a `datetime-local` input value to the wire's seconds precision.
#[cfg(any(test, feature = "hydrate"))]
fn datetime_local_to_wire(raw: &str) -> String {
    let raw = raw.trim();
    // "YYYY-MM-DDTHH:MM" from the input; the backend completes the zone.
    if raw.len() == 16 {
        format!("{raw}:00")
    } else {
        raw.to_owned()
    }
}

fn validate_event_input(summary: &str, start: &str) -> Result<(), &'static str> {
    if summary.trim().is_empty() || start.trim().is_empty() {
        return Err("Summary and start are required.");
    }
    Ok(())
}

/// Build the provider-shaped payload for create/update calls.
#[cfg(any(test, feature = "hydrate"))]
fn build_event_payload(
    summary: &str,
    description: &str,
    all_day: bool,
    start: &str,
    end: &str,
) -> serde_json::Value {
    let mut map = serde_json::Map::new();
    map.insert("summary".to_owned(), summary.trim().into());
    if !description.trim().is_empty() {
        map.insert("description".to_owned(), description.trim().into());
    }
    if all_day {
        let date = start.trim();
        map.insert("start".to_owned(), serde_json::json!({ "date": date }));
        map.insert("end".to_owned(), serde_json::json!({ "date": date }));
    } else {
        let start_wire = datetime_local_to_wire(start);
        let end_wire = if end.trim().is_empty() {
            start_wire.clone()
        } else {
            datetime_local_to_wire(end)
        };
        map.insert("start".to_owned(), serde_json::json!({ "dateTime": start_wire }));
        map.insert("end".to_owned(), serde_json::json!({ "dateTime": end_wire }));
    }
    serde_json::Value::Object(map)
}

/// Format a normalized window for the list row.
fn format_window(window: &EventWindow) -> String {
    if window.all_day {
        format!("{} (all day)", window.start.format("%Y-%m-%d"))
    } else if window.start.date() == window.end.date() {
        format!(
            "{} to {}",
            window.start.format("%Y-%m-%d %H:%M"),
            window.end.format("%H:%M")
        )
    } else {
        format!(
            "{} to {}",
            window.start.format("%Y-%m-%d %H:%M"),
            window.end.format("%Y-%m-%d %H:%M")
        )
    }
}

/// Dialog prefill values for editing an existing event.
fn event_form_values(event: &CalendarEvent) -> (String, String, bool, String, String) {
    let all_day = event.start.date.is_some();
    let trim_local = |raw: &str| raw.chars().take(16).collect::<String>();
    let start = event
        .start
        .date
        .clone()
        .or_else(|| event.start.date_time.as_deref().map(trim_local))
        .unwrap_or_default();
    let end = if all_day {
        String::new()
    } else {
        event
            .end
            .date_time
            .as_deref()
            .map(trim_local)
            .unwrap_or_default()
    };
    (
        event.summary.clone(),
        event.description.clone().unwrap_or_default(),
        all_day,
        start,
        end,
    )
}

#[cfg(feature = "hydrate")]
fn load_events(
    list: RwSignal<ListState<CalendarEvent>>,
    alive: std::sync::Arc<std::sync::atomic::AtomicBool>,
) {
    leptos::task::spawn_local(async move {
        let fetched = crate::net::api::list_events().await;
        if !alive.load(std::sync::atomic::Ordering::Relaxed) {
            return;
        }
        match fetched {
            Ok(items) => list.set(ListState::loaded(items)),
            Err(message) => list.set(ListState::failed(message)),
        }
    });
}

/// Route wrapper for `/google-calendar/events/add`.
#[component]
pub fn CalendarEventsAddPage() -> impl IntoView {
    view! { <CalendarEventsPage open_add=true/> }
}

#[component]
pub fn CalendarEventsPage(#[prop(optional)] open_add: bool) -> impl IntoView {
    let session = expect_context::<Session>();
    let navigate = use_navigate();
    crate::util::auth::install_unauth_redirect(session, navigate);

    let list = RwSignal::new(ListState::<CalendarEvent>::default());
    let pending_delete = RwSignal::new(None::<String>);

    // Dialog state; prefilled when editing.
    let dialog_open = RwSignal::new(open_add);
    let editing_id = RwSignal::new(None::<String>);
    let summary = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let all_day = RwSignal::new(false);
    let start = RwSignal::new(String::new());
    let end = RwSignal::new(String::new());
    let dialog_error = RwSignal::new(String::new());

    #[cfg(feature = "hydrate")]
    let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));

    #[cfg(feature = "hydrate")]
    {
        let alive_mount = alive.clone();
        let search = web_sys::window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        if let Some(code) = extract_oauth_code(&search) {
            let alive_task = alive_mount.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::exchange_google_code(&code).await {
                    Ok(tokens) => {
                        storage::save_raw(storage::GOOGLE_ACCESS_TOKEN_KEY, &tokens.access_token);
                        if let Some(refresh) = tokens.refresh_token {
                            storage::save_raw(storage::GOOGLE_REFRESH_TOKEN_KEY, &refresh);
                        }
                        // Strip the query so a reload does not replay the
                        // exchange with a spent code.
                        if let Some(window) = web_sys::window() {
                            if let Ok(history) = window.history() {
                                let _ = history.replace_state_with_url(
                                    &wasm_bindgen::JsValue::NULL,
                                    "",
                                    Some("/google-calendar/events"),
                                );
                            }
                        }
                    }
                    Err(message) => {
                        log::warn!("calendar token exchange failed: {message}");
                    }
                }
                if alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                    load_events(list, alive_task.clone());
                }
            });
        } else {
            load_events(list, alive_mount);
        }

        let alive_cleanup = alive.clone();
        on_cleanup(move || alive_cleanup.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    let reset_dialog = move || {
        editing_id.set(None);
        summary.set(String::new());
        description.set(String::new());
        all_day.set(false);
        start.set(String::new());
        end.set(String::new());
        dialog_error.set(String::new());
    };

    let on_add = move |_| {
        reset_dialog();
        dialog_open.set(true);
    };

    let on_edit = Callback::new(move |event: CalendarEvent| {
        let (s, d, a, st, en) = event_form_values(&event);
        editing_id.set(event.id);
        summary.set(s);
        description.set(d);
        all_day.set(a);
        start.set(st);
        end.set(en);
        dialog_error.set(String::new());
        dialog_open.set(true);
    });

    let on_dialog_cancel = Callback::new(move |()| dialog_open.set(false));

    #[cfg(feature = "hydrate")]
    let alive_submit = alive.clone();
    let on_dialog_submit = Callback::new(move |()| {
        if let Err(message) = validate_event_input(&summary.get_untracked(), &start.get_untracked())
        {
            dialog_error.set(message.to_owned());
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            let payload = build_event_payload(
                &summary.get_untracked(),
                &description.get_untracked(),
                all_day.get_untracked(),
                &start.get_untracked(),
                &end.get_untracked(),
            );
            let editing = editing_id.get_untracked();
            let alive_task = alive_submit.clone();
            leptos::task::spawn_local(async move {
                let result = match editing {
                    Some(id) => crate::net::api::update_event(&id, &payload).await.map(|_| ()),
                    None => crate::net::api::create_event(&payload).await.map(|_| ()),
                };
                match result {
                    Ok(()) => {
                        dialog_open.set(false);
                        load_events(list, alive_task);
                    }
                    Err(message) => dialog_error.set(message),
                }
            });
        }
    });

    let on_delete_cancel = Callback::new(move |()| pending_delete.set(None));
    let on_delete_confirm = Callback::new(move |()| {
        let Some(id) = pending_delete.get_untracked() else {
            return;
        };
        pending_delete.set(None);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::delete_event(&id).await {
                Ok(()) => list.update(|s| s.remove_where(|event| event.id.as_deref() == Some(&id))),
                Err(message) => list.update(|s| s.error = Some(message)),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = id;
    });

    view! {
        <div class="list-page calendar-page">
            <NavBar/>
            <main class="list-page__body">
                <header class="list-page__header">
                    <h1>"Calendar Events"</h1>
                    <button class="btn btn--primary" on:click=on_add>
                        "+ New Event"
                    </button>
                    <a class="btn calendar-page__connect" href="/google/auth/login">
                        "Connect Google Calendar"
                    </a>
                </header>
                <Show when=move || list.get().error.is_some()>
                    <p class="list-page__error">{move || list.get().error.unwrap_or_default()}</p>
                </Show>
                <Show
                    when=move || !list.get().loading
                    fallback=move || view! { <p>"Loading events..."</p> }
                >
                    <ul class="calendar-page__events">
                        {move || {
                            list.get()
                                .items
                                .into_iter()
                                .map(|event| {
                                    let when = event
                                        .window()
                                        .map(|w| format_window(&w))
                                        .unwrap_or_default();
                                    let edit_event = event.clone();
                                    let delete_id = event.id.clone();
                                    view! {
                                        <li class="calendar-page__event">
                                            <span class="calendar-page__event-summary">
                                                {event.summary.clone()}
                                            </span>
                                            <span class="calendar-page__event-when">{when}</span>
                                            <button
                                                class="btn"
                                                on:click=move |_| on_edit.run(edit_event.clone())
                                            >
                                                "Edit"
                                            </button>
                                            <button
                                                class="btn btn--danger"
                                                on:click=move |_| {
                                                    pending_delete.set(delete_id.clone());
                                                }
                                            >
                                                "Delete"
                                            </button>
                                        </li>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </ul>
                </Show>
            </main>
            <Show when=move || dialog_open.get()>
                <EventDialog
                    title="Calendar Event"
                    summary=summary
                    description=description
                    all_day=all_day
                    start=start
                    end=end
                    error=dialog_error
                    on_submit=on_dialog_submit
                    on_cancel=on_dialog_cancel
                />
            </Show>
            <Show when=move || pending_delete.get().is_some()>
                <ConfirmDialog
                    title="Delete Event"
                    message="This will permanently delete this calendar event."
                    confirm_label="Delete"
                    on_confirm=on_delete_confirm
                    on_cancel=on_delete_cancel
                />
            </Show>
        </div>
    }
}
