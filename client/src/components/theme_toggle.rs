//! Theme toggle button rendered into the navbar.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server cannot see the visitor's stored theme, so the button is rendered
//! with the label for the configured default. After hydration `dom::install`
//! takes over the element by id and corrects the label from storage.

use leptos::prelude::*;
use theme::ThemeConfig;

#[cfg(test)]
#[path = "theme_toggle_test.rs"]
mod theme_toggle_test;

/// Label shown before the browser binding runs.
pub fn initial_label(config: &ThemeConfig) -> String {
    config.label_for(config.default_theme).to_owned()
}

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let config = use_context::<ThemeConfig>().unwrap_or_else(crate::app::theme_config);
    let label = initial_label(&config);

    view! {
        <button
            id={config.control_id}
            type="button"
            class="btn btn-outline-secondary navbar__theme-toggle"
            title="Toggle theme"
        >
            {label}
        </button>
    }
}
