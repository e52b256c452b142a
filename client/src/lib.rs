//! # nora-client
//!
//! Leptos + WASM frontend for Nora AI, an authenticated email composer.
//!
//! This crate contains pages, components, screen state machines, the
//! identity-backend client, and the call to the email generation backend.
//! The `nora-server` crate renders it with SSR; the `hydrate` build runs it in the
//! browser.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
