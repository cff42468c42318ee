//! Inline status banners for fetch and mutation outcomes.

use leptos::prelude::*;

/// Banner severity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlertKind {
    Error,
    Success,
}

/// Render a banner whenever `message` is non-empty.
#[component]
pub fn Alert(kind: AlertKind, #[prop(into)] message: Signal<String>) -> impl IntoView {
    let class = match kind {
        AlertKind::Error => "alert alert--error",
        AlertKind::Success => "alert alert--success",
    };
    view! {
        <Show when=move || !message.get().is_empty()>
            <p class=class role="alert">
                {move || message.get()}
            </p>
        </Show>
    }
}
