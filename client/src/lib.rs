//! # client
//!
//! Leptos + WASM frontend for the travel dashboard.
//!
//! Besides pages and layout components, this crate owns the sidebar toggle:
//! a document-level click listener that collapses or expands the sidebar,
//! remembers the choice in `localStorage`, and re-applies it on load.
//! Browser-only code is compiled under the `hydrate` feature; the `ssr`
//! build renders the same components on the server.

pub mod app;
pub mod components;
pub mod nav;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: route logs and panics to the console, then hydrate.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
