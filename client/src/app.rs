//! Root application component with routing and context providers.
//!
//! DESIGN
//! ======
//! The server owns the [`ThemeConfig`]. [`shell`] provides it as context for
//! the SSR render and embeds it in a `<meta>` tag; in the browser
//! [`theme_config`] reads that tag back, so the hydrated `App` and
//! `dom::install` see the same control id, attribute and storage key the
//! server rendered with.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};
use theme::config::DEFAULT_ATTRIBUTE;
use theme::{ThemeConfig, ThemeError};

use crate::components::theme_toggle::ThemeToggle;
use crate::pages::home::HomePage;

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

const BOOTSTRAP_CSS: &str = "https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css";

/// Element id of the `<meta>` tag carrying the serialized theme config.
pub const THEME_CONFIG_META_ID: &str = "theme-config";

/// Serialized config for the shell's `<meta>` tag.
pub fn embedded_json(config: &ThemeConfig) -> String {
    config.to_json().unwrap_or_default()
}

/// Parse the `<meta>` content written by [`embedded_json`].
///
/// A missing or empty tag means the default config.
///
/// # Errors
///
/// Returns [`ThemeError::InvalidConfig`] when the content is present but
/// rejected.
pub fn parse_embedded(raw: Option<&str>) -> Result<ThemeConfig, ThemeError> {
    match raw.map(str::trim) {
        Some(raw) if !raw.is_empty() => ThemeConfig::from_json(raw),
        _ => Ok(ThemeConfig::default()),
    }
}

/// Theme config for this page: the one the server embedded in the shell.
pub fn theme_config() -> ThemeConfig {
    #[cfg(feature = "hydrate")]
    {
        let raw = crate::dom::meta_content(THEME_CONFIG_META_ID);
        parse_embedded(raw.as_deref()).unwrap_or_else(|e| {
            log::warn!("ignoring embedded theme config: {e}");
            ThemeConfig::default()
        })
    }
    #[cfg(not(feature = "hydrate"))]
    {
        ThemeConfig::default()
    }
}

/// Root attribute value rendered by the server.
///
/// Only the default attribute name can be written statically; a custom one is
/// applied by the browser binding on load.
pub fn root_theme_attribute(config: &ThemeConfig) -> Option<&'static str> {
    (config.attribute == DEFAULT_ATTRIBUTE).then_some(config.default_theme.as_str())
}

/// HTML shell rendered on the server for SSR + hydration.
///
/// The root carries the configured default theme until the browser binding
/// applies the stored one.
pub fn shell(options: LeptosOptions, config: ThemeConfig) -> impl IntoView {
    let root_theme = root_theme_attribute(&config);
    let embedded = embedded_json(&config);
    provide_context(config);

    view! {
        <!DOCTYPE html>
        <html lang="en" data-bs-theme=root_theme>
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name="theme-config" id=THEME_CONFIG_META_ID content=embedded/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    let config = use_context::<ThemeConfig>().unwrap_or_else(theme_config);
    provide_context(config);

    view! {
        <Stylesheet id="bootstrap" href=BOOTSTRAP_CSS/>
        <Title text="Theme Switch"/>

        <nav class="navbar border-bottom px-3">
            <span class="navbar-brand">"Theme Switch"</span>
            <ThemeToggle/>
        </nav>

        <main class="container py-4">
            <Router>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                </Routes>
            </Router>
        </main>
    }
}
