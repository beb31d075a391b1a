//! # portfolio
//!
//! Leptos + WASM single-page personal portfolio.
//!
//! The page renders a hero section from a compiled-in profile, keeps document
//! metadata (title, social preview tags, JSON-LD) in sync with that profile,
//! persists a light/dark theme preference, and draws a spring-animated cursor
//! on pointer devices.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`app`] | Root component, context providers, document effects |
//! | [`pages`] | The home page layout |
//! | [`components`] | Hero, links, theme toggle, cursor |
//! | [`state`] | Theme, pointer, and owned UI state |
//! | [`util`] | Head reconciliation, theme effects, springs, browser adapters |
//! | [`config`] | Site configuration and profile record |
//! | [`error`] | Crate error type |
//!
//! Build for the browser with the `csr` feature (see `index.html` for the
//! Trunk entry). Without it the crate compiles natively and all browser
//! adapters become no-ops, which is how the unit tests run.

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    if let Err(e) = console_log::init_with_level(level) {
        web_sys::console::warn_1(&format!("logger already initialized: {e}").into());
    }
    log::info!("portfolio: mounting");

    leptos::mount::mount_to_body(app::App);
}
