//! Light/dark theme state and the toggle handler that keeps it in sync.
//!
//! This crate owns the theme model shared by the `client` (browser) and the
//! server-rendered shell. It is UI-framework agnostic: the document root,
//! persistent storage and the toggle control are reached only through the
//! adapter traits in [`adapter`], so the handler runs natively in tests.

pub mod adapter;
pub mod config;
pub mod memory;
pub mod toggle;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use adapter::{ThemeRoot, ThemeStore, ToggleControl};
pub use config::{ThemeConfig, ToggleLabels};
pub use toggle::ThemeToggle;

/// Errors raised by theme parsing, configuration and adapters.
///
/// The toggle handler logs these and carries on; they never reach the user.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ThemeError {
    /// A string did not name a known theme.
    #[error("unknown theme: {0:?}")]
    UnknownTheme(String),
    /// Theme configuration was rejected.
    #[error("invalid theme config: {0}")]
    InvalidConfig(String),
    /// The host refused a DOM mutation.
    #[error("dom operation failed: {0}")]
    Dom(String),
    /// Persistent storage is not available in this context.
    #[error("persistent storage unavailable")]
    StorageUnavailable,
    /// Persistent storage rejected a write.
    #[error("storage write failed: {0}")]
    Storage(String),
}

/// Visual mode of the page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Attribute and storage representation.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// The other theme.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("light") {
            Ok(Self::Light)
        } else if trimmed.eq_ignore_ascii_case("dark") {
            Ok(Self::Dark)
        } else {
            Err(ThemeError::UnknownTheme(s.to_owned()))
        }
    }
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
