//! In-memory adapters for tests and non-browser hosts.

use std::collections::HashMap;

use crate::ThemeError;
use crate::adapter::{ThemeRoot, ThemeStore, ToggleControl};

/// Attribute map standing in for the document root.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryRoot {
    attributes: HashMap<String, String>,
    /// Reject every `set_attribute` call.
    pub read_only: bool,
}

impl MemoryRoot {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Root with `name` already set to `value`.
    #[must_use]
    pub fn with_attribute(name: &str, value: &str) -> Self {
        let mut root = Self::new();
        root.attributes.insert(name.to_owned(), value.to_owned());
        root
    }

    /// Root that rejects every write.
    #[must_use]
    pub fn read_only() -> Self {
        Self { read_only: true, ..Self::default() }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }
}

impl ThemeRoot for MemoryRoot {
    fn attribute(&self, name: &str) -> Option<String> {
        self.attributes.get(name).cloned()
    }

    fn set_attribute(&mut self, name: &str, value: &str) -> Result<(), ThemeError> {
        if self.read_only {
            return Err(ThemeError::Dom(format!("cannot set {name}: root is read-only")));
        }
        self.attributes.insert(name.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Key-value map standing in for `localStorage`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
    /// Behave like a browser with storage disabled.
    pub unavailable: bool,
    /// Number of successful writes.
    pub writes: usize,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.entries.insert(key.to_owned(), value.to_owned());
        store
    }

    /// Store behaving like a browser with storage disabled.
    #[must_use]
    pub fn unavailable() -> Self {
        Self { unavailable: true, ..Self::default() }
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl ThemeStore for MemoryStore {
    fn load(&self, key: &str) -> Option<String> {
        if self.unavailable {
            return None;
        }
        self.entries.get(key).cloned()
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), ThemeError> {
        if self.unavailable {
            return Err(ThemeError::StorageUnavailable);
        }
        self.entries.insert(key.to_owned(), value.to_owned());
        self.writes += 1;
        Ok(())
    }
}

/// Records the label text it was given.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryControl {
    pub label: Option<String>,
}

impl MemoryControl {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}

impl ToggleControl for MemoryControl {
    fn set_label(&mut self, text: &str) {
        self.label = Some(text.to_owned());
    }
}
