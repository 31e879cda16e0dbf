//! # client
//!
//! Leptos + WASM frontend for the theme switch page.
//!
//! The server renders [`app::shell`] with the toggle control in the navbar;
//! in the browser [`hydrate`] reads the theme config the server embedded,
//! hydrates the app and hands the control to [`dom::install`], which keeps
//! the `<html>` theme attribute and `localStorage` in sync.

pub mod app;
pub mod components;
#[cfg(feature = "hydrate")]
pub mod dom;
pub mod pages;

/// WASM entry point.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    let config = app::theme_config();
    leptos::mount::hydrate_body(app::App);

    if !dom::install(&config) {
        log::debug!("theme toggle not installed");
    }
}
