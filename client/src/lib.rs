//! # client
//!
//! Leptos + WASM frontend for the budget tracker.
//!
//! This crate contains pages, components, session state, and the REST client
//! for the external budget API. The `hydrate` feature builds the browser
//! bundle; the `ssr` feature is consumed by the host server for rendering.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install browser logging and hydrate the server markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
