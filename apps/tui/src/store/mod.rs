//! JSON-file backend for the persistence port.
//!
//! The whole map lives in one file (`autodrive-store.json` by default) and is
//! re-read on every access, so two sessions pointed at the same file see
//! each other's writes on their next read.

use autodrive_core::storage::{KeyValueStore, StorageError};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File contents, or `None` when the file is missing or blank.
    fn read_content(&self, key: &str) -> Result<Option<String>, StorageError> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path).map_err(|error| StorageError::Read {
            key: key.to_owned(),
            reason: format!("failed to read `{}`: {error}", self.path.display()),
        })?;
        Ok(Some(content).filter(|content| !content.trim().is_empty()))
    }

    fn read_map(&self, key: &str) -> Result<BTreeMap<String, String>, StorageError> {
        let Some(content) = self.read_content(key)? else {
            return Ok(BTreeMap::new());
        };

        serde_json::from_str(&content).map_err(|error| StorageError::Read {
            key: key.to_owned(),
            reason: format!("`{}` is not a JSON object: {error}", self.path.display()),
        })
    }

    /// The map a write starts from. A corrupt file is dropped and rewritten.
    fn map_for_write(&self, key: &str) -> Result<BTreeMap<String, String>, StorageError> {
        let Some(content) = self.read_content(key)? else {
            return Ok(BTreeMap::new());
        };

        Ok(serde_json::from_str(&content).unwrap_or_else(|error| {
            warn!(path = %self.path.display(), %error, "discarding corrupt store file");
            BTreeMap::new()
        }))
    }

    fn write_map(&self, key: &str, map: &BTreeMap<String, String>) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|error| StorageError::Write {
                    key: key.to_owned(),
                    reason: format!("failed to create `{}`: {error}", parent.display()),
                })?;
            }
        }

        let encoded = serde_json::to_string_pretty(map).map_err(|error| StorageError::Write {
            key: key.to_owned(),
            reason: error.to_string(),
        })?;
        fs::write(&self.path, encoded).map_err(|error| StorageError::Write {
            key: key.to_owned(),
            reason: format!("failed to write `{}`: {error}", self.path.display()),
        })?;
        debug!(key, path = %self.path.display(), "store written");
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.read_map(key)?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut map = self.map_for_write(key)?;
        map.insert(key.to_owned(), value.to_owned());
        self.write_map(key, &map)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut map = self.map_for_write(key)?;
        if map.remove(key).is_none() {
            return Ok(());
        }
        self.write_map(key, &map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use autodrive_core::storage::FAVORITES_KEY;
    use autodrive_core::{FavoritesStore, Theme};
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> FileStore {
        FileStore::new(dir.path().join("store.json"))
    }

    #[test]
    fn missing_file_reads_as_empty() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        assert_eq!(store.get(FAVORITES_KEY).unwrap(), None);
        assert!(!store.path().exists());
    }

    #[test]
    fn values_survive_a_new_handle() {
        let dir = TempDir::new().unwrap();
        store_in(&dir).set("autodrive-theme", "dark").unwrap();

        let reopened = store_in(&dir);
        assert_eq!(
            reopened.get("autodrive-theme").unwrap().as_deref(),
            Some("dark")
        );
        assert_eq!(Theme::load(&reopened), Theme::Dark);
    }

    #[test]
    fn remove_keeps_other_keys() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.set("a", "1").unwrap();
        store.set("b", "2").unwrap();

        store.remove("a").unwrap();
        store.remove("missing").unwrap();

        assert_eq!(store.get("a").unwrap(), None);
        assert_eq!(store.get("b").unwrap().as_deref(), Some("2"));
    }

    #[test]
    fn creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path().join("nested/deeper/store.json"));

        store.set("k", "v").unwrap();

        assert!(store.path().exists());
    }

    #[test]
    fn corrupt_file_is_a_read_error() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), "not json").unwrap();

        assert!(matches!(
            store.get(FAVORITES_KEY),
            Err(StorageError::Read { .. })
        ));
        // The favorites store treats an unreadable backend as an empty set.
        let favorites = FavoritesStore::new(store);
        assert!(favorites.list().is_empty());
    }

    #[test]
    fn write_replaces_a_corrupt_file() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), "not json").unwrap();

        let favorites = FavoritesStore::new(store_in(&dir));
        assert!(favorites.toggle("kia-rio-2021").unwrap());
        assert_eq!(favorites.list(), vec!["kia-rio-2021".to_string()]);
        assert_eq!(
            store.get(FAVORITES_KEY).unwrap().as_deref(),
            Some(r#"["kia-rio-2021"]"#)
        );
    }

    #[test]
    fn remove_on_a_corrupt_file_succeeds() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), "{broken").unwrap();

        store.remove("autodrive-last-lead").unwrap();
        store.set("autodrive-theme", "dark").unwrap();

        assert_eq!(Theme::load(&store), Theme::Dark);
    }

    #[test]
    fn favorites_persist_through_the_file() {
        let dir = TempDir::new().unwrap();
        let favorites = FavoritesStore::new(store_in(&dir));
        assert!(favorites.toggle("kia-rio-2021").unwrap());

        let reopened = FavoritesStore::new(store_in(&dir));
        assert_eq!(reopened.list(), vec!["kia-rio-2021".to_string()]);
    }
}
