//! Application detail screen with related interviews and reminders.
//!
//! A missing application triggers the delayed redirect back to the list;
//! failures on the related collections degrade to inline messages instead.

#[cfg(test)]
#[path = "application_detail_test.rs"]
mod application_detail_test;

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::nav_bar::NavBar;
use crate::net::types::{Application, Interview, Reminder};
use crate::state::session::Session;

#[cfg(any(test, feature = "hydrate"))]
pub(crate) const NOT_FOUND_MESSAGE: &str = "Application not found. Redirecting...";

#[cfg(any(test, feature = "hydrate"))]
fn parse_route_id(raw: Option<String>) -> Option<i64> {
    raw.as_deref().and_then(|value| value.parse::<i64>().ok())
}

#[component]
pub fn ApplicationDetailPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let navigate = use_navigate();
    crate::util::auth::install_unauth_redirect(session, navigate.clone());

    let params = use_params_map();
    let application = RwSignal::new(None::<Application>);
    let interviews = RwSignal::new(Vec::<Interview>::new());
    let reminders = RwSignal::new(Vec::<Reminder>::new());
    let related_error = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());

    #[cfg(feature = "hydrate")]
    {
        let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let alive_effect = alive.clone();
        let navigate_back = navigate.clone();
        Effect::new(move || {
            let id = parse_route_id(params.read().get("id"));
            let alive_task = alive_effect.clone();
            let navigate_back = navigate_back.clone();
            leptos::task::spawn_local(async move {
                let Some(id) = id else {
                    error.set(NOT_FOUND_MESSAGE.to_owned());
                    gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(
                        super::REDIRECT_DELAY_MS,
                    )))
                    .await;
                    navigate_back("/applications", leptos_router::NavigateOptions::default());
                    return;
                };

                let (fetched_app, fetched_interviews, fetched_reminders) = futures::join!(
                    crate::net::api::fetch_application(id),
                    crate::net::api::application_interviews(id),
                    crate::net::api::application_reminders(id),
                );
                if !alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                    return;
                }

                match fetched_app {
                    Ok(app) => application.set(Some(app)),
                    Err(_) => {
                        error.set(NOT_FOUND_MESSAGE.to_owned());
                        gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(
                            super::REDIRECT_DELAY_MS,
                        )))
                        .await;
                        if alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                            navigate_back("/applications", leptos_router::NavigateOptions::default());
                        }
                        return;
                    }
                }
                match fetched_interviews {
                    Ok(items) => interviews.set(items),
                    Err(message) => related_error.set(message),
                }
                match fetched_reminders {
                    Ok(items) => reminders.set(items),
                    Err(message) => {
                        if related_error.get_untracked().is_empty() {
                            related_error.set(message);
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
        <div class="detail-page application-detail-page">
            <NavBar/>
            <main class="detail-page__body">
                <Show when=move || !error.get().is_empty()>
                    <p class="detail-page__error">{move || error.get()}</p>
                </Show>
                <Show
                    when=move || application.get().is_some()
                    fallback=move || {
                        view! {
                            <Show when=move || error.get().is_empty()>
                                <p>"Loading application..."</p>
                            </Show>
                        }
                    }
                >
                    {move || {
                        application
                            .get()
                            .map(|app| {
                                let update_href = format!("/applications/{}/update", app.id);
                                view! {
                                    <article class="detail-card">
                                        <h1>{app.title}</h1>
                                        <p class="detail-card__company">{app.company}</p>
                                        {app
                                            .status
                                            .map(|status| {
                                                view! { <p class="detail-card__status">{status}</p> }
                                            })}
                                        {app
                                            .date_applied
                                            .map(|date| {
                                                view! {
                                                    <p class="detail-card__date">"Applied " {date}</p>
                                                }
                                            })}
                                        {app
                                            .notes
                                            .map(|notes| {
                                                view! { <p class="detail-card__notes">{notes}</p> }
                                            })}
                                        <a class="btn" href=update_href>
                                            "Edit"
                                        </a>
                                    </article>
                                }
                            })
                    }}
                    <Show when=move || !related_error.get().is_empty()>
                        <p class="detail-page__related-error">{move || related_error.get()}</p>
                    </Show>
                    <section class="detail-page__related">
                        <h2>"Interviews"</h2>
                        <ul>
                            {move || {
                                interviews
                                    .get()
                                    .into_iter()
                                    .map(|interview| {
                                        let href = format!("/interviews/{}", interview.id);
                                        view! {
                                            <li>
                                                <a href=href>
                                                    {interview.round} " — " {interview.scheduled_at}
                                                </a>
                                            </li>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </ul>
                    </section>
                    <section class="detail-page__related">
                        <h2>"Reminders"</h2>
                        <ul>
                            {move || {
                                reminders
                                    .get()
                                    .into_iter()
                                    .map(|reminder| {
                                        let href = format!("/reminders/{}", reminder.id);
                                        view! {
                                            <li>
                                                <a href=href>
                                                    {reminder.title} " — " {reminder.remind_at}
                                                </a>
                                            </li>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </ul>
                    </section>
                </Show>
            </main>
        </div>
    }
}
