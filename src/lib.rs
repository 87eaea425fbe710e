//! # coach-client
//!
//! Leptos + WASM frontend session layer for the AI Interview Coach SPA.
//!
//! The crate establishes whether a visitor is authenticated, persists that
//! across page reloads (`auth`), attaches the bearer token to outgoing
//! calls (`net`), exposes the current identity as shared reactive state
//! (`state`), and gates navigation to protected views (`routes` + the
//! guard wiring in `app`).

pub mod app;
pub mod auth;
pub mod components;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(crate::app::App);
}
