//! # client
//!
//! Leptos + WASM frontend for the bank dashboard.
//!
//! This crate contains pages, components, application state, and the thin
//! `gloo-net` service wrappers around the backend REST API. The `server`
//! crate renders [`app::shell`] and forwards `/api` requests to the backend.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: attach the Leptos app to the server-rendered markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
