//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render screen chrome and shared interaction surfaces while
//! reading/writing shared state from Leptos context providers.

pub mod alert;
pub mod confirm_dialog;
pub mod event_dialog;
pub mod nav_bar;
pub mod record_card;
