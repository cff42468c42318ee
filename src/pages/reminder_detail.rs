//! Reminder detail screen.

#[cfg(test)]
#[path = "reminder_detail_test.rs"]
mod reminder_detail_test;

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::nav_bar::NavBar;
use crate::net::types::Reminder;
use crate::state::session::Session;

#[cfg(any(test, feature = "hydrate"))]
pub(crate) const NOT_FOUND_MESSAGE: &str = "Reminder not found. Redirecting...";

#[component]
pub fn ReminderDetailPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let navigate = use_navigate();
    crate::util::auth::install_unauth_redirect(session, navigate.clone());

    let params = use_params_map();
    let reminder = RwSignal::new(None::<Reminder>);
    let error = RwSignal::new(String::new());

    #[cfg(feature = "hydrate")]
    {
        let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let alive_effect = alive.clone();
        let navigate_back = navigate.clone();
        Effect::new(move || {
            let id = params.read().get("id").and_then(|v| v.parse::<i64>().ok());
            let alive_task = alive_effect.clone();
            let navigate_back = navigate_back.clone();
            leptos::task::spawn_local(async move {
                let fetched = match id {
                    Some(id) => crate::net::api::fetch_reminder(id).await,
                    None => Err("bad route id".to_owned()),
                };
                if !alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                    return;
                }
                match fetched {
                    Ok(record) => reminder.set(Some(record)),
                    Err(_) => {
                        error.set(NOT_FOUND_MESSAGE.to_owned());
                        gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(
                            super::REDIRECT_DELAY_MS,
                        )))
                        .await;
                        if alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                            navigate_back("/reminders", leptos_router::NavigateOptions::default());
                        }
                    }
                }
            });
        });
        on_cleanup(move || alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (&params, &navigate);
    }

    view! {
        <div class="detail-page reminder-detail-page">
            <NavBar/>
            <main class="detail-page__body">
                <Show when=move || !error.get().is_empty()>
                    <p class="detail-page__error">{move || error.get()}</p>
                </Show>
                <Show
                    when=move || reminder.get().is_some()
                    fallback=move || {
                        view! {
                            <Show when=move || error.get().is_empty()>
                                <p>"Loading reminder..."</p>
                            </Show>
                        }
                    }
                >
                    {move || {
                        reminder
                            .get()
                            .map(|record| {
                                let update_href = format!("/reminders/{}/update", record.id);
                                let application_link = record
                                    .application_id
                                    .map(|app_id| {
                                        let href = format!("/applications/{app_id}");
                                        view! {
                                            <a class="detail-card__link" href=href>
                                                "View application"
                                            </a>
                                        }
                                    });
                                view! {
                                    <article class="detail-card">
                                        <h1>{record.title}</h1>
                                        <p class="detail-card__date">{record.remind_at}</p>
                                        {record
                                            .notes
                                            .map(|notes| {
                                                view! { <p class="detail-card__notes">{notes}</p> }
                                            })}
                                        {application_link}
                                        <a class="btn" href=update_href>
                                            "Edit"
                                        </a>
                                    </article>
                                }
                            })
                    }}
                </Show>
            </main>
        </div>
    }
}
