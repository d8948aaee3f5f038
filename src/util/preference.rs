//! Key-value preference storage.
//!
//! SYSTEM CONTEXT
//! ==============
//! The theme controller is the only writer. It is handed a store rather than
//! reaching for `localStorage` itself, so the same state machine runs against
//! the browser in production and against `MemoryStore` in tests and when the
//! browser refuses storage access (private mode, disabled cookies).

#[cfg(test)]
#[path = "preference_test.rs"]
mod preference_test;

use std::cell::RefCell;
use std::collections::HashMap;

use crate::error::UiError;

pub trait PreferenceStore {
    /// Read the raw value stored under `key`.
    fn load(&self, key: &str) -> Option<String>;

    /// Write `value` under `key`.
    fn save(&self, key: &str, value: &str) -> Result<(), UiError>;
}

/// Session-lifetime store. Values vanish on reload.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with one entry.
    #[must_use]
    pub fn with_value(key: &str, value: &str) -> Self {
        let store = Self::new();
        store.values.borrow_mut().insert(key.to_owned(), value.to_owned());
        store
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn save(&self, key: &str, value: &str) -> Result<(), UiError> {
        self.values.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for Box<S> {
    fn load(&self, key: &str) -> Option<String> {
        (**self).load(key)
    }

    fn save(&self, key: &str, value: &str) -> Result<(), UiError> {
        (**self).save(key, value)
    }
}

/// `window.localStorage` for the page's origin.
#[cfg(feature = "hydrate")]
pub struct LocalStorageStore {
    storage: web_sys::Storage,
}

#[cfg(feature = "hydrate")]
impl LocalStorageStore {
    /// Open the origin's storage. Browsers may throw or return `null` here.
    pub fn open() -> Result<Self, UiError> {
        let window = web_sys::window().ok_or(UiError::StorageUnavailable)?;
        match window.local_storage() {
            Ok(Some(storage)) => Ok(Self { storage }),
            Ok(None) | Err(_) => Err(UiError::StorageUnavailable),
        }
    }
}

#[cfg(feature = "hydrate")]
impl PreferenceStore for LocalStorageStore {
    fn load(&self, key: &str) -> Option<String> {
        match self.storage.get_item(key) {
            Ok(value) => value,
            Err(err) => {
                log::warn!("{}", UiError::js("localStorage.getItem", &err));
                None
            }
        }
    }

    fn save(&self, key: &str, value: &str) -> Result<(), UiError> {
        use crate::error::JsResultExt;
        self.storage.set_item(key, value).context("localStorage.setItem")
    }
}
