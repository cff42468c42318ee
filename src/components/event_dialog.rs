//! Modal dialog for creating and editing calendar events.
//!
//! The owning page supplies the field signals (so the edit flow can prefill
//! them from an existing event) and performs the actual submit; this
//! component only renders the form surface.

use leptos::prelude::*;

#[component]
pub fn EventDialog(
    title: &'static str,
    summary: RwSignal<String>,
    description: RwSignal<String>,
    all_day: RwSignal<bool>,
    start: RwSignal<String>,
    end: RwSignal<String>,
    error: RwSignal<String>,
    on_submit: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog dialog--event" on:click=move |ev| ev.stop_propagation()>
                <h2>{title}</h2>
                <label class="dialog__label">
                    "Summary"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || summary.get()
                        on:input=move |ev| summary.set(event_target_value(&ev))
                        on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                on_submit.run(());
                            }
                        }
                    />
                </label>
                <label class="dialog__label">
                    "Description"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || description.get()
                        on:input=move |ev| description.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label dialog__label--inline">
                    <input
                        type="checkbox"
                        prop:checked=move || all_day.get()
                        on:change=move |ev| all_day.set(event_target_checked(&ev))
                    />
                    "All day"
                </label>
                <label class="dialog__label">
                    {move || if all_day.get() { "Date" } else { "Start" }}
                    <input
                        class="dialog__input"
                        type=move || if all_day.get() { "date" } else { "datetime-local" }
                        prop:value=move || start.get()
                        on:input=move |ev| start.set(event_target_value(&ev))
                    />
                </label>
                <Show when=move || !all_day.get()>
                    <label class="dialog__label">
                        "End"
                        <input
                            class="dialog__input"
                            type="datetime-local"
                            prop:value=move || end.get()
                            on:input=move |ev| end.set(event_target_value(&ev))
                        />
                    </label>
                </Show>
                <Show when=move || !error.get().is_empty()>
                    <p class="dialog__error">{move || error.get()}</p>
                </Show>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" on:click=move |_| on_submit.run(())>
                        "Save"
                    </button>
                </div>
            </div>
        </div>
    }
}
