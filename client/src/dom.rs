//! Browser adapters binding the theme toggle to the live document.
//!
//! Reads the stored theme from `localStorage`, applies it as an attribute on
//! the `<html>` element and wires a click listener on the toggle control.
//! Requires a browser environment.
//!
//! TRADE-OFFS
//! ==========
//! Storage is best-effort: when `localStorage` is blocked the page still
//! toggles for its lifetime, it just forgets the choice on reload.

use theme::{ThemeConfig, ThemeError, ThemeRoot, ThemeStore, ThemeToggle, ToggleControl};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Element, Event, Storage};

/// The `<html>` element.
pub struct DocumentRoot(Element);

impl ThemeRoot for DocumentRoot {
    fn attribute(&self, name: &str) -> Option<String> {
        self.0.get_attribute(name)
    }

    fn set_attribute(&mut self, name: &str, value: &str) -> Result<(), ThemeError> {
        self.0
            .set_attribute(name, value)
            .map_err(|e| ThemeError::Dom(format!("set {name}: {e:?}")))
    }
}

/// `window.localStorage`, if the browser grants it.
pub struct LocalStore(Option<Storage>);

impl LocalStore {
    pub fn open() -> Self {
        Self(web_sys::window().and_then(|w| w.local_storage().ok().flatten()))
    }
}

impl ThemeStore for LocalStore {
    fn load(&self, key: &str) -> Option<String> {
        self.0.as_ref()?.get_item(key).ok().flatten()
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), ThemeError> {
        let storage = self.0.as_ref().ok_or(ThemeError::StorageUnavailable)?;
        storage
            .set_item(key, value)
            .map_err(|e| ThemeError::Storage(format!("{e:?}")))
    }
}

/// The toggle control element; its text content is the label.
pub struct ElementControl(Element);

impl ElementControl {
    pub fn element(&self) -> &Element {
        &self.0
    }
}

impl ToggleControl for ElementControl {
    fn set_label(&mut self, text: &str) {
        self.0.set_text_content(Some(text));
    }
}

/// `content` attribute of the element with id `id`, typically a `<meta>` tag.
pub fn meta_content(id: &str) -> Option<String> {
    web_sys::window()?
        .document()?
        .get_element_by_id(id)?
        .get_attribute("content")
}

/// Bind the theme toggle to the control with id `config.control_id`.
///
/// Returns `false` (having touched nothing) when there is no document or the
/// control is absent.
pub fn install(config: &ThemeConfig) -> bool {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return false;
    };
    let Some(root) = document.document_element() else {
        return false;
    };

    let control = document.get_element_by_id(&config.control_id).map(ElementControl);
    let Some(mut handler) = ThemeToggle::attach(DocumentRoot(root), LocalStore::open(), control, config.clone())
    else {
        return false;
    };
    handler.init();

    let target = handler.control().element().clone();
    let on_click = Closure::<dyn FnMut(Event)>::new(move |_: Event| {
        handler.toggle();
    });
    if let Err(e) = target.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref()) {
        log::warn!("failed to bind theme toggle: {e:?}");
        return false;
    }
    // The listener lives as long as the page.
    on_click.forget();
    true
}
