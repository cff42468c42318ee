//! Applications list screen with toggled delete mode.

#[cfg(test)]
#[path = "applications_test.rs"]
mod applications_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::nav_bar::NavBar;
use crate::components::record_card::RecordCard;
use crate::net::types::Application;
use crate::state::list::{delete_mode_label, ListState};
use crate::state::session::Session;

fn card_meta(app: &Application) -> Option<String> {
    match (&app.status, &app.date_applied) {
        (Some(status), Some(date)) => Some(format!("{status} · {date}")),
        (Some(status), None) => Some(status.clone()),
        (None, Some(date)) => Some(date.clone()),
        (None, None) => None,
    }
}

#[component]
pub fn ApplicationsPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let navigate = use_navigate();
    crate::util::auth::install_unauth_redirect(session, navigate);

    let list = RwSignal::new(ListState::<Application>::default());
    let pending_delete = RwSignal::new(None::<i64>);

    #[cfg(feature = "hydrate")]
    {
        let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let alive_task = alive.clone();
        leptos::task::spawn_local(async move {
            let fetched = crate::net::api::list_applications().await;
            if !alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                return;
            }
            match fetched {
                Ok(items) => list.set(ListState::loaded(items)),
                Err(message) => list.set(ListState::failed(message)),
            }
        });
        on_cleanup(move || alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    let on_delete_request = Callback::new(move |id: i64| pending_delete.set(Some(id)));
    let on_delete_cancel = Callback::new(move |()| pending_delete.set(None));
    let on_delete_confirm = Callback::new(move |()| {
        let Some(id) = pending_delete.get_untracked() else {
            return;
        };
        pending_delete.set(None);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::delete_application(id).await {
                Ok(()) => list.update(|s| s.remove_where(|app| app.id == id)),
                Err(message) => list.update(|s| s.error = Some(message)),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = id;
    });

    view! {
        <div class="list-page applications-page">
            <NavBar/>
            <main class="list-page__body">
                <header class="list-page__header">
                    <h1>"Applications"</h1>
                    <a class="btn btn--primary" href="/applications/new">
                        "+ New Application"
                    </a>
                    <button
                        class="btn list-page__delete-toggle"
                        on:click=move |_| list.update(|s| s.toggle_delete_mode())
                    >
                        {move || delete_mode_label(list.get().delete_mode)}
                    </button>
                </header>
                <Show when=move || list.get().error.is_some()>
                    <p class="list-page__error">{move || list.get().error.unwrap_or_default()}</p>
                </Show>
                <Show
                    when=move || !list.get().loading
                    fallback=move || view! { <p>"Loading applications..."</p> }
                >
                    <div class="list-page__cards">
                        {move || {
                            list.get()
                                .items
                                .into_iter()
                                .map(|app| {
                                    let meta = card_meta(&app);
                                    view! {
                                        <RecordCard
                                            id=app.id
                                            href=format!("/applications/{}", app.id)
                                            title=app.title
                                            subtitle=Some(app.company)
                                            meta=meta
                                            delete_mode=Signal::derive(move || list.get().delete_mode)
                                            on_delete=on_delete_request
                                        />
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </div>
                </Show>
            </main>
            <Show when=move || pending_delete.get().is_some()>
                <ConfirmDialog
                    title="Delete Application"
                    message="This will permanently delete this application."
                    confirm_label="Delete"
                    on_confirm=on_delete_confirm
                    on_cancel=on_delete_cancel
                />
            </Show>
        </div>
    }
}
