//! `localStorage`-backed preference store.

use web_sys::Storage;

use crate::error::ControllerError;
use crate::ports::{MemoryStore, PreferenceStore};

/// Browser storage, or an in-memory stand-in when the page has none
/// (sandboxed iframes, some private browsing modes).
pub struct LocalStorage {
    storage: Option<Storage>,
    fallback: MemoryStore,
}

impl LocalStorage {
    #[must_use]
    pub fn open() -> Self {
        let storage = match web_sys::window().map(|w| w.local_storage()) {
            Some(Ok(storage)) => storage,
            Some(Err(e)) => {
                log::warn!("localStorage unavailable: {e:?}");
                None
            }
            None => None,
        };
        Self { storage, fallback: MemoryStore::new() }
    }
}

impl PreferenceStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, ControllerError> {
        match &self.storage {
            Some(storage) => storage
                .get_item(key)
                .map_err(|e| ControllerError::Storage(format!("{e:?}"))),
            None => self.fallback.get(key),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ControllerError> {
        match &self.storage {
            Some(storage) => storage
                .set_item(key, value)
                .map_err(|e| ControllerError::Storage(format!("{e:?}"))),
            None => self.fallback.set(key, value),
        }
    }
}
