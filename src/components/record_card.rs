//! Reusable card for domain-record list items.
//!
//! DESIGN
//! ======
//! Keeps list presentation consistent across the applications, interviews,
//! and reminders screens while centralizing the delete-mode affordance. The
//! destructive action itself is deferred to the owning page via `on_delete`
//! so the confirmation flow stays in one place per screen.

use leptos::prelude::*;

/// A clickable card representing one record in a list screen.
#[component]
pub fn RecordCard(
    id: i64,
    href: String,
    title: String,
    subtitle: Option<String>,
    meta: Option<String>,
    #[prop(into)] delete_mode: Signal<bool>,
    #[prop(optional)] on_delete: Option<Callback<i64>>,
) -> impl IntoView {
    let on_delete_click = Callback::new(move |()| {
        if let Some(on_delete) = on_delete.as_ref() {
            on_delete.run(id);
        }
    });

    view! {
        <a class="record-card" href=href>
            <span class="record-card__title">{title}</span>
            {subtitle.map(|text| view! { <span class="record-card__subtitle">{text}</span> })}
            {meta.map(|text| view! { <span class="record-card__meta">{text}</span> })}
            <Show when=move || delete_mode.get()>
                <button
                    class="record-card__delete"
                    on:click=move |ev: leptos::ev::MouseEvent| {
                        ev.prevent_default();
                        ev.stop_propagation();
                        on_delete_click.run(());
                    }
                    title="Delete"
                    aria-label="Delete"
                >
                    "✕"
                </button>
            </Show>
        </a>
    }
}
