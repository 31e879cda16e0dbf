//! Host seams for the toggle handler.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser binding implements these over `web-sys`; [`crate::memory`]
//! implements them over plain values. Blanket impls for `&mut T` let callers
//! lend an adapter to a handler and inspect it afterwards.

use crate::ThemeError;

/// Element carrying the active theme as an attribute (the document root).
pub trait ThemeRoot {
    /// Current value of attribute `name`, if set.
    fn attribute(&self, name: &str) -> Option<String>;

    /// Set attribute `name` to `value`.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Dom`] when the host rejects the mutation.
    fn set_attribute(&mut self, name: &str, value: &str) -> Result<(), ThemeError>;
}

/// Durable key-value storage holding the chosen theme.
pub trait ThemeStore {
    fn load(&self, key: &str) -> Option<String>;

    /// Persist `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::StorageUnavailable`] or [`ThemeError::Storage`]
    /// when the write cannot be made.
    fn save(&mut self, key: &str, value: &str) -> Result<(), ThemeError>;
}

/// The control the user clicks; only its visible text is managed.
pub trait ToggleControl {
    fn set_label(&mut self, text: &str);
}

impl<T: ThemeRoot + ?Sized> ThemeRoot for &mut T {
    fn attribute(&self, name: &str) -> Option<String> {
        (**self).attribute(name)
    }

    fn set_attribute(&mut self, name: &str, value: &str) -> Result<(), ThemeError> {
        (**self).set_attribute(name, value)
    }
}

impl<T: ThemeStore + ?Sized> ThemeStore for &mut T {
    fn load(&self, key: &str) -> Option<String> {
        (**self).load(key)
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), ThemeError> {
        (**self).save(key, value)
    }
}

impl<T: ToggleControl + ?Sized> ToggleControl for &mut T {
    fn set_label(&mut self, text: &str) {
        (**self).set_label(text);
    }
}
