//! # client
//!
//! Leptos frontend for linkbin: a login/sign-up page and a dashboard that
//! lists and adds the signed-in user's links.
//!
//! Pages hold their state in signals and delegate every decision (guards,
//! validation, request sequencing) to the `links` crate. This crate only
//! wires those state machines to the DOM and the browser.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        leptos::logging::warn!("console logger already installed: {e}");
    }
    leptos::mount::hydrate_body(app::App);
}
