//! Favorites set persisted through the key/value port.
//!
//! The store never caches: every query reads the persisted list and every
//! mutation rewrites it wholesale, so the storage entry is the single source
//! of truth. Views that show favorite state register a callback with
//! [`FavoritesStore::subscribe`] and get told about each mutation; the
//! returned [`Subscription`] deregisters when dropped.

use crate::notice::Notice;
use crate::storage::{KeyValueStore, StorageError, FAVORITES_KEY};
use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangeKind {
    Added(String),
    Removed(String),
    Cleared,
}

/// Delivered to every subscriber after the new set has been persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FavoritesChange {
    pub kind: ChangeKind,
    /// Size of the persisted set after the mutation.
    pub count: usize,
}

impl FavoritesChange {
    pub const fn notice(&self) -> Notice {
        match self.kind {
            ChangeKind::Added(_) => Notice::FavoriteAdded,
            ChangeKind::Removed(_) => Notice::FavoriteRemoved,
            ChangeKind::Cleared => Notice::FavoritesCleared,
        }
    }
}

type Callback = Rc<dyn Fn(&FavoritesChange)>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    callbacks: Vec<(u64, Callback)>,
}

/// Keeps a callback registered for as long as it is alive.
#[must_use = "dropping a Subscription deregisters its callback"]
pub struct Subscription {
    id: u64,
    registry: Weak<RefCell<Registry>>,
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry
                .borrow_mut()
                .callbacks
                .retain(|(id, _)| *id != self.id);
        }
    }
}

pub struct FavoritesStore<S> {
    storage: S,
    registry: Rc<RefCell<Registry>>,
}

impl<S: fmt::Debug> fmt::Debug for FavoritesStore<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FavoritesStore")
            .field("storage", &self.storage)
            .field("subscribers", &self.registry.borrow().callbacks.len())
            .finish()
    }
}

impl<S: KeyValueStore> FavoritesStore<S> {
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            registry: Rc::new(RefCell::new(Registry::default())),
        }
    }

    /// Persisted identifiers in canonical (sorted, de-duplicated) order.
    /// A list stored in add order or with repeats is normalized here and
    /// written back in canonical form by the next toggle.
    pub fn list(&self) -> Vec<String> {
        let raw = match self.storage.get(FAVORITES_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!(error = %e, "favorites read failed");
                return Vec::new();
            }
        };

        let Ok(serde_json::Value::Array(values)) = serde_json::from_str::<serde_json::Value>(&raw)
        else {
            warn!("ignoring malformed favorites entry");
            return Vec::new();
        };

        let mut ids: Vec<String> = values
            .into_iter()
            .filter_map(|value| match value {
                serde_json::Value::String(id) => Some(id),
                _ => None,
            })
            .collect();
        ids.sort();
        ids.dedup();
        ids
    }

    pub fn contains(&self, id: &str) -> bool {
        self.list().iter().any(|favorite| favorite == id)
    }

    pub fn count(&self) -> usize {
        self.list().len()
    }

    /// Flips membership of `id` and returns the new state.
    pub fn toggle(&self, id: &str) -> Result<bool, StorageError> {
        let mut ids = self.list();
        let (active, kind) = match ids.binary_search_by(|probe| probe.as_str().cmp(id)) {
            Ok(index) => {
                ids.remove(index);
                (false, ChangeKind::Removed(id.to_owned()))
            }
            Err(index) => {
                ids.insert(index, id.to_owned());
                (true, ChangeKind::Added(id.to_owned()))
            }
        };

        self.write(&ids)?;
        debug!(id, active, count = ids.len(), "favorite toggled");
        self.notify(&FavoritesChange {
            kind,
            count: ids.len(),
        });

        Ok(active)
    }

    pub fn clear(&self) -> Result<(), StorageError> {
        self.write(&[])?;
        debug!("favorites cleared");
        self.notify(&FavoritesChange {
            kind: ChangeKind::Cleared,
            count: 0,
        });
        Ok(())
    }

    pub fn subscribe(&self, callback: impl Fn(&FavoritesChange) + 'static) -> Subscription {
        let mut registry = self.registry.borrow_mut();
        let id = registry.next_id;
        registry.next_id += 1;
        registry.callbacks.push((id, Rc::new(callback)));

        Subscription {
            id,
            registry: Rc::downgrade(&self.registry),
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.registry.borrow().callbacks.len()
    }

    fn write(&self, ids: &[String]) -> Result<(), StorageError> {
        crate::storage::save_json(&self.storage, FAVORITES_KEY, ids)
    }

    fn notify(&self, change: &FavoritesChange) {
        // Callbacks may read the store or drop subscriptions, so run them on a
        // snapshot with the registry released.
        let callbacks: Vec<Callback> = self
            .registry
            .borrow()
            .callbacks
            .iter()
            .map(|(_, callback)| Rc::clone(callback))
            .collect();

        for callback in callbacks {
            callback(change);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use std::cell::Cell;

    fn store() -> FavoritesStore<Rc<MemoryStore>> {
        FavoritesStore::new(Rc::new(MemoryStore::new()))
    }

    #[test]
    fn toggle_adds_then_removes() {
        let favorites = store();
        assert!(favorites.toggle("bmw-x5-2020").unwrap());
        assert!(favorites.contains("bmw-x5-2020"));
        assert!(!favorites.toggle("bmw-x5-2020").unwrap());
        assert!(!favorites.contains("bmw-x5-2020"));
    }

    #[test]
    fn toggle_twice_restores_persisted_bytes() {
        let backing = Rc::new(MemoryStore::new());
        let favorites = FavoritesStore::new(Rc::clone(&backing));
        favorites.toggle("a").unwrap();
        favorites.toggle("c").unwrap();
        let before = backing.raw(FAVORITES_KEY);

        for id in ["b", "a", "c"] {
            favorites.toggle(id).unwrap();
            favorites.toggle(id).unwrap();
            assert_eq!(backing.raw(FAVORITES_KEY), before);
        }
    }

    #[test]
    fn malformed_entry_reads_as_empty() {
        let backing = MemoryStore::new().with_entry(FAVORITES_KEY, "{oops");
        let favorites = FavoritesStore::new(backing);
        assert!(favorites.list().is_empty());
        assert_eq!(favorites.count(), 0);
    }

    #[test]
    fn non_array_and_non_string_items_are_ignored() {
        let favorites = FavoritesStore::new(
            MemoryStore::new().with_entry(FAVORITES_KEY, r#"{"id": "a"}"#),
        );
        assert!(favorites.list().is_empty());

        let favorites = FavoritesStore::new(
            MemoryStore::new().with_entry(FAVORITES_KEY, r#"["b", 3, "a", "b"]"#),
        );
        assert_eq!(favorites.list(), vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn add_order_list_is_rewritten_canonically() {
        let backing =
            Rc::new(MemoryStore::new().with_entry(FAVORITES_KEY, r#"["c","a","c"]"#));
        let favorites = FavoritesStore::new(Rc::clone(&backing));
        assert_eq!(favorites.list(), vec!["a".to_string(), "c".to_string()]);

        favorites.toggle("b").unwrap();
        assert_eq!(
            backing.raw(FAVORITES_KEY).as_deref(),
            Some(r#"["a","b","c"]"#)
        );
    }

    #[test]
    fn clear_empties_the_set() {
        let favorites = store();
        favorites.toggle("a").unwrap();
        favorites.toggle("b").unwrap();
        favorites.clear().unwrap();
        assert_eq!(favorites.count(), 0);
    }

    #[test]
    fn subscribers_see_count_matching_storage() {
        let favorites = Rc::new(store());
        let seen = Rc::new(Cell::new(usize::MAX));

        let _subscription = {
            let seen = Rc::clone(&seen);
            let reader = Rc::clone(&favorites);
            favorites.subscribe(move |change| {
                assert_eq!(change.count, reader.count());
                seen.set(change.count);
            })
        };

        favorites.toggle("a").unwrap();
        assert_eq!(seen.get(), 1);
        favorites.toggle("b").unwrap();
        assert_eq!(seen.get(), 2);
        favorites.clear().unwrap();
        assert_eq!(seen.get(), 0);
    }

    #[test]
    fn change_maps_to_notice() {
        let favorites = store();
        let last = Rc::new(RefCell::new(None));
        let _subscription = {
            let last = Rc::clone(&last);
            favorites.subscribe(move |change| *last.borrow_mut() = Some(change.notice()))
        };

        favorites.toggle("a").unwrap();
        assert_eq!(*last.borrow(), Some(Notice::FavoriteAdded));
        favorites.toggle("a").unwrap();
        assert_eq!(*last.borrow(), Some(Notice::FavoriteRemoved));
        favorites.clear().unwrap();
        assert_eq!(*last.borrow(), Some(Notice::FavoritesCleared));
    }

    #[test]
    fn dropping_subscription_deregisters() {
        let favorites = store();
        let calls = Rc::new(Cell::new(0));
        let subscription = {
            let calls = Rc::clone(&calls);
            favorites.subscribe(move |_| calls.set(calls.get() + 1))
        };
        assert_eq!(favorites.subscriber_count(), 1);

        favorites.toggle("a").unwrap();
        drop(subscription);
        assert_eq!(favorites.subscriber_count(), 0);
        favorites.toggle("a").unwrap();
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn subscription_may_outlive_store() {
        let favorites = store();
        let subscription = favorites.subscribe(|_| {});
        drop(favorites);
        drop(subscription);
    }
}
