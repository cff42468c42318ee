//! Dashboard page, the authenticated landing route.
//!
//! SYSTEM CONTEXT
//! ==============
//! Issues the three collection fetches concurrently on mount and renders one
//! section per source. Sources settle independently, so a failing collection
//! degrades to an inline message while the others still render.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::nav_bar::NavBar;
#[cfg(any(test, feature = "hydrate"))]
use crate::net::api::{partial_failure_notice, DashboardData};
#[cfg(any(test, feature = "hydrate"))]
use crate::net::types::{Application, Interview, Reminder};
use crate::state::session::Session;

/// How many records each dashboard section previews.
#[cfg(any(test, feature = "hydrate"))]
const SECTION_PREVIEW_LIMIT: usize = 5;

/// One rendered dashboard entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct SectionItem {
    pub href: String,
    pub label: String,
}

/// Render model for one dashboard section.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct SectionView {
    pub count: usize,
    pub items: Vec<SectionItem>,
    pub error: Option<String>,
}

/// Render model for the whole dashboard after all sources settle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct DashboardView {
    pub applications: SectionView,
    pub interviews: SectionView,
    pub reminders: SectionView,
    pub notice: Option<String>,
}

#[cfg(any(test, feature = "hydrate"))]
fn application_section(result: &Result<Vec<Application>, String>) -> SectionView {
    match result {
        Ok(items) => SectionView {
            count: items.len(),
            items: items
                .iter()
                .take(SECTION_PREVIEW_LIMIT)
                .map(|app| SectionItem {
                    href: format!("/applications/{}", app.id),
                    label: format!("{} @ {}", app.title, app.company),
                })
                .collect(),
            error: None,
        },
        Err(message) => SectionView {
            count: 0,
            items: Vec::new(),
            error: Some(message.clone()),
        },
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn interview_section(result: &Result<Vec<Interview>, String>) -> SectionView {
    match result {
        Ok(items) => SectionView {
            count: items.len(),
            items: items
                .iter()
                .take(SECTION_PREVIEW_LIMIT)
                .map(|interview| SectionItem {
                    href: format!("/interviews/{}", interview.id),
                    label: format!("{} — {}", interview.round, interview.scheduled_at),
                })
                .collect(),
            error: None,
        },
        Err(message) => SectionView {
            count: 0,
            items: Vec::new(),
            error: Some(message.clone()),
        },
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn reminder_section(result: &Result<Vec<Reminder>, String>) -> SectionView {
    match result {
        Ok(items) => SectionView {
            count: items.len(),
            items: items
                .iter()
                .take(SECTION_PREVIEW_LIMIT)
                .map(|reminder| SectionItem {
                    href: format!("/reminders/{}", reminder.id),
                    label: format!("{} — {}", reminder.title, reminder.remind_at),
                })
                .collect(),
            error: None,
        },
        Err(message) => SectionView {
            count: 0,
            items: Vec::new(),
            error: Some(message.clone()),
        },
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn summarize(data: &DashboardData) -> DashboardView {
    DashboardView {
        applications: application_section(&data.applications),
        interviews: interview_section(&data.interviews),
        reminders: reminder_section(&data.reminders),
        notice: partial_failure_notice(data),
    }
}

/// Dashboard page. Redirects to `/login` if the user is not authenticated.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let navigate = use_navigate();
    crate::util::auth::install_unauth_redirect(session, navigate);

    let view_data = RwSignal::new(None::<DashboardView>);

    #[cfg(feature = "hydrate")]
    {
        let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let alive_task = alive.clone();
        leptos::task::spawn_local(async move {
            let data = crate::net::api::fetch_dashboard_data().await;
            if !alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                return;
            }
            view_data.set(Some(summarize(&data)));
        });
        on_cleanup(move || alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    view! {
        <Show
            when=move || !session.state.get().loading && session.state.get().user.is_some()
            fallback=move || {
                view! {
                    <div class="dashboard-page">
                        <p>
                            {move || {
                                if session.state.get().loading {
                                    "Loading..."
                                } else {
                                    "Redirecting to login..."
                                }
                            }}
                        </p>
                    </div>
                }
            }
        >
            <div class="dashboard-page">
                <NavBar/>
                <main class="dashboard-page__grid">
                    <Show when=move || view_data.get().is_some_and(|d| d.notice.is_some())>
                        <p class="dashboard-page__notice">
                            {move || view_data.get().and_then(|d| d.notice).unwrap_or_default()}
                        </p>
                    </Show>
                    <Show
                        when=move || view_data.get().is_some()
                        fallback=move || view! { <p>"Loading dashboard..."</p> }
                    >
                        <DashboardSection
                            title="Applications"
                            all_href="/applications"
                            section=Signal::derive(move || {
                                view_data.get().map(|d| d.applications).unwrap_or_else(empty_section)
                            })
                        />
                        <DashboardSection
                            title="Interviews"
                            all_href="/interviews"
                            section=Signal::derive(move || {
                                view_data.get().map(|d| d.interviews).unwrap_or_else(empty_section)
                            })
                        />
                        <DashboardSection
                            title="Reminders"
                            all_href="/reminders"
                            section=Signal::derive(move || {
                                view_data.get().map(|d| d.reminders).unwrap_or_else(empty_section)
                            })
                        />
                    </Show>
                </main>
            </div>
        </Show>
    }
}

fn empty_section() -> SectionView {
    SectionView {
        count: 0,
        items: Vec::new(),
        error: None,
    }
}

#[component]
fn DashboardSection(
    title: &'static str,
    all_href: &'static str,
    section: Signal<SectionView>,
) -> impl IntoView {
    view! {
        <section class="dashboard-section">
            <h2 class="dashboard-section__heading">
                {title} " (" {move || section.get().count} ")"
            </h2>
            <Show when=move || section.get().error.is_some()>
                <p class="dashboard-section__error">
                    {move || section.get().error.unwrap_or_default()}
                </p>
            </Show>
            <ul class="dashboard-section__items">
                {move || {
                    section
                        .get()
                        .items
                        .into_iter()
                        .map(|item| {
                            view! {
                                <li>
                                    <a href=item.href>{item.label}</a>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </ul>
            <a class="dashboard-section__all" href=all_href>
                "View all"
            </a>
        </section>
    }
}
