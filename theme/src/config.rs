//! Theme toggle configuration.
//!
//! Defaults match the Bootstrap convention: `data-bs-theme` on `<html>`,
//! storage key `theme`, control `#theme-toggle`.

use serde::{Deserialize, Serialize};

use crate::{Theme, ThemeError};

pub const DEFAULT_ATTRIBUTE: &str = "data-bs-theme";
pub const DEFAULT_STORAGE_KEY: &str = "theme";
pub const DEFAULT_CONTROL_ID: &str = "theme-toggle";

/// Control text for each available action.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToggleLabels {
    /// Shown while light is active.
    pub to_dark: String,
    /// Shown while dark is active.
    pub to_light: String,
}

impl Default for ToggleLabels {
    fn default() -> Self {
        Self { to_dark: "Dark Mode".to_owned(), to_light: "Light Mode".to_owned() }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Root element attribute carrying the active theme.
    pub attribute: String,
    /// Persistent storage key.
    pub storage_key: String,
    /// Element id of the toggle control.
    pub control_id: String,
    /// Applied when nothing valid is stored.
    pub default_theme: Theme,
    pub labels: ToggleLabels,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            attribute: DEFAULT_ATTRIBUTE.to_owned(),
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            control_id: DEFAULT_CONTROL_ID.to_owned(),
            default_theme: Theme::default(),
            labels: ToggleLabels::default(),
        }
    }
}

impl ThemeConfig {
    /// Parse a JSON object of overrides; missing fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::InvalidConfig`] for malformed JSON or an empty
    /// attribute, storage key or control id.
    pub fn from_json(raw: &str) -> Result<Self, ThemeError> {
        let config: Self = serde_json::from_str(raw).map_err(|e| ThemeError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize every field, for embedding in a page and reading back with
    /// [`ThemeConfig::from_json`].
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::InvalidConfig`] if serialization fails.
    pub fn to_json(&self) -> Result<String, ThemeError> {
        serde_json::to_string(self).map_err(|e| ThemeError::InvalidConfig(e.to_string()))
    }

    /// # Errors
    ///
    /// Returns [`ThemeError::InvalidConfig`] naming the first empty field.
    pub fn validate(&self) -> Result<(), ThemeError> {
        for (field, value) in [
            ("attribute", &self.attribute),
            ("storage_key", &self.storage_key),
            ("control_id", &self.control_id),
        ] {
            if value.trim().is_empty() {
                return Err(ThemeError::InvalidConfig(format!("{field} must not be empty")));
            }
        }
        Ok(())
    }

    /// Label naming the theme the next click activates while `active` is applied.
    #[must_use]
    pub fn label_for(&self, active: Theme) -> &str {
        match active {
            Theme::Light => &self.labels.to_dark,
            Theme::Dark => &self.labels.to_light,
        }
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
