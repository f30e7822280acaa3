//! Seams between controller logic and the browser.
//!
//! Feature modules talk to storage and window navigation only through these
//! traits. The `dom` module provides the `web_sys` implementations; tests and
//! storage-less environments use the in-memory ones below.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::error::ControllerError;

/// Synchronous key-value persistence (`localStorage` in the browser).
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, ControllerError>;
    fn set(&self, key: &str, value: &str) -> Result<(), ControllerError>;
}

/// Window-level navigation and blocking user notification.
pub trait Navigator {
    /// Open `url` in a new browsing context.
    fn open_new_context(&self, url: &str) -> Result<(), ControllerError>;

    /// Show a blocking alert.
    fn alert(&self, message: &str);
}

/// Process-lifetime store used when browser storage is unavailable.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        store.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        store
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, ControllerError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ControllerError> {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}
