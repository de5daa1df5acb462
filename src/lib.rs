//! # portal-client
//!
//! Leptos + WASM frontend for the subscription portal of the API service:
//! authentication flows, pricing and checkout handoff, account settings,
//! and the usage dashboard. All data comes from the REST backend; the only
//! client-held state is the current session and the last-fetched
//! subscription snapshot.
//!
//! This crate contains pages, components, application state, the typed
//! REST wrappers, and the persisted token store. Browser-only code is
//! gated behind the `hydrate` feature so the pure state logic compiles
//! and tests on any host.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install the panic hook and console logger, then
/// hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
