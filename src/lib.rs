//! # job-jotter
//!
//! Leptos + WASM frontend for Job Jotter, a job-application tracker.
//! Every screen follows the same shape: fetch a list or record from the
//! REST backend, render it, optionally mutate it through a form, and
//! navigate.
//!
//! This crate contains pages, components, application state, the REST
//! client, and browser-storage glue. The backend and the external calendar
//! provider are consumed over HTTP and are not part of this repository.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install panic/log hooks and hydrate the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
