//! # tigerlink-client
//!
//! Leptos + WASM front-end for the TigerLink mentorship app: registration and
//! login, role-specific profiles, mentorship requests, and the match
//! dashboard.
//!
//! All decisions (validation, route gating, response classification, session
//! transitions) are plain Rust that compiles for both `hydrate` and `ssr` and
//! is unit-tested natively. Browser I/O sits behind `net::transport`.

#![recursion_limit = "256"]

pub mod app;
pub mod components;
pub mod forms;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs logging and hydrates the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    // Fails only if a logger is already installed.
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
