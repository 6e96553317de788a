//! # client
//!
//! Leptos + WASM frontend for the ScanSek sugar-tracking dashboard.
//!
//! This crate contains pages, components, reactive state, the in-memory mock
//! services that stand in for a backend, and the pure table/chart/validation
//! logic those pages render from. The `ssr` feature is consumed by the host
//! binary; the `hydrate` feature builds the browser bundle.

pub mod app;
pub mod components;
pub mod pages;
pub mod services;
pub mod state;
pub mod util;

/// Browser entry point: install panic/log hooks and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
