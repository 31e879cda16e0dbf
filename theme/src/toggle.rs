//! Theme toggle handler.
//!
//! DESIGN
//! ======
//! Persistent storage is the source of truth on load; the root attribute is
//! the source of truth on click. After `init` or `toggle` both copies and the
//! control label agree. Adapter failures are logged and swallowed so a click
//! never surfaces an error to the page.

use crate::adapter::{ThemeRoot, ThemeStore, ToggleControl};
use crate::config::ThemeConfig;
use crate::Theme;

/// Handler bound to one toggle control.
pub struct ThemeToggle<R, S, C> {
    root: R,
    store: S,
    control: C,
    config: ThemeConfig,
}

impl<R, S, C> ThemeToggle<R, S, C>
where
    R: ThemeRoot,
    S: ThemeStore,
    C: ToggleControl,
{
    /// Bind a handler to `control`.
    ///
    /// Returns `None` without touching `root` or `store` when the control is
    /// absent from the page.
    pub fn attach(root: R, store: S, control: Option<C>, config: ThemeConfig) -> Option<Self> {
        let Some(control) = control else {
            log::debug!("theme toggle control #{} not found; skipping", config.control_id);
            return None;
        };
        Some(Self { root, store, control, config })
    }

    /// Apply the stored theme (or the default) to the root and label the control.
    pub fn init(&mut self) -> Theme {
        let theme = self.stored_theme();
        self.apply(theme);
        self.refresh_label();
        log::debug!("theme initialized to {theme}");
        theme
    }

    /// Flip the applied theme, persist it and relabel the control.
    pub fn toggle(&mut self) -> Theme {
        let next = self.current().toggled();
        self.apply(next);
        if let Err(e) = self.store.save(&self.config.storage_key, next.as_str()) {
            log::warn!("failed to persist theme {next}: {e}");
        }
        self.refresh_label();
        log::debug!("theme toggled to {next}");
        next
    }

    /// Theme currently applied to the root.
    ///
    /// Only the exact value `"dark"` counts as dark; anything else, including
    /// a missing attribute or `"DARK"`, counts as light.
    #[must_use]
    pub fn current(&self) -> Theme {
        match self.root.attribute(&self.config.attribute) {
            Some(raw) if raw == Theme::Dark.as_str() => Theme::Dark,
            _ => Theme::Light,
        }
    }

    /// Label the control with the action the next click performs.
    pub fn refresh_label(&mut self) {
        let label = self.config.label_for(self.current()).to_owned();
        self.control.set_label(&label);
    }

    #[must_use]
    pub fn config(&self) -> &ThemeConfig {
        &self.config
    }

    #[must_use]
    pub fn root(&self) -> &R {
        &self.root
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub fn control(&self) -> &C {
        &self.control
    }

    fn stored_theme(&self) -> Theme {
        let Some(raw) = self.store.load(&self.config.storage_key) else {
            return self.config.default_theme;
        };
        raw.parse().unwrap_or_else(|e| {
            log::warn!("ignoring stored theme: {e}");
            self.config.default_theme
        })
    }

    fn apply(&mut self, theme: Theme) {
        if let Err(e) = self.root.set_attribute(&self.config.attribute, theme.as_str()) {
            log::warn!("failed to apply theme {theme}: {e}");
        }
    }
}

#[cfg(test)]
#[path = "toggle_test.rs"]
mod tests;
