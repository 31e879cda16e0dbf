//! Server configuration parsed from environment variables.

use theme::{ThemeConfig, ThemeError};

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;

/// Errors produced while reading server configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// `PORT` is not a number in 1-65535.
    #[error("invalid PORT {0:?}: expected a number in 1-65535")]
    InvalidPort(String),

    /// `HOST` is set but blank.
    #[error("HOST must not be empty")]
    EmptyHost,

    /// `THEME_CONFIG` is not valid theme config JSON.
    #[error("THEME_CONFIG: {0}")]
    Theme(#[from] ThemeError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Handed to the page shell and, through it, to the browser binding.
    pub theme: ThemeConfig,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `HOST`: default `0.0.0.0`
    /// - `PORT`: default `3000`
    /// - `THEME_CONFIG`: JSON overrides for [`ThemeConfig`], e.g.
    ///   `{"storage_key":"ui-theme","default_theme":"dark"}`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when `HOST` is blank, `PORT` is invalid or
    /// `THEME_CONFIG` is rejected.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Same as [`ServerConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = match lookup("HOST") {
            Some(raw) if raw.trim().is_empty() => return Err(ConfigError::EmptyHost),
            Some(raw) => raw.trim().to_owned(),
            None => DEFAULT_HOST.to_owned(),
        };
        let port = match lookup("PORT") {
            Some(raw) => parse_port(&raw)?,
            None => DEFAULT_PORT,
        };
        let theme = match lookup("THEME_CONFIG") {
            Some(raw) if !raw.trim().is_empty() => ThemeConfig::from_json(&raw)?,
            _ => ThemeConfig::default(),
        };
        Ok(Self { host, port, theme })
    }

    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_port(raw: &str) -> Result<u16, ConfigError> {
    match raw.trim().parse::<u16>() {
        Ok(port) if port > 0 => Ok(port),
        _ => Err(ConfigError::InvalidPort(raw.to_owned())),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
