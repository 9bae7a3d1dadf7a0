//! # docsite-ui
//!
//! Leptos + WASM interactive layer for a generated documentation site.
//! Replaces the inline page scripts (theme toggle, nav and component
//! filtering, remote search) with a Rust-native UI whose behaviors are
//! pure state transitions, testable without a browser.
//!
//! The static site generator that produces the pages, the manifest, and
//! the `/api/search` endpoint live elsewhere; this crate only hydrates
//! what they emit.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install the panic hook, route `log` output to the
/// console, and hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
