use autodrive_core::storage::{KeyValueStore, StorageError};
use web_sys::Storage;

/// `window.localStorage` behind the persistence port.
#[derive(Debug, Clone, Default)]
pub struct LocalStore {
    storage: Option<Storage>,
}

impl LocalStore {
    /// Private browsing or disabled storage leaves the store unavailable;
    /// reads then behave as empty and writes fail softly.
    pub fn open() -> Self {
        let storage = web_sys::window().and_then(|window| window.local_storage().ok().flatten());
        if storage.is_none() {
            crate::dom::log_error("localStorage is unavailable, nothing will be remembered");
        }
        Self { storage }
    }

    fn storage(&self) -> Result<&Storage, StorageError> {
        self.storage
            .as_ref()
            .ok_or_else(|| StorageError::Unavailable("localStorage".to_string()))
    }
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let Ok(storage) = self.storage() else {
            return Ok(None);
        };
        storage.get_item(key).map_err(|e| StorageError::Read {
            key: key.to_owned(),
            reason: format!("{e:?}"),
        })
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::Write {
                key: key.to_owned(),
                reason: format!("{e:?}"),
            })
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.storage()?
            .remove_item(key)
            .map_err(|e| StorageError::Write {
                key: key.to_owned(),
                reason: format!("{e:?}"),
            })
    }
}
