use crate::storage::LocalStore;
use crate::toast::Toast;
use autodrive_core::{Dataset, FavoritesStore};
use std::rc::Rc;

pub type Store = Rc<LocalStore>;

/// Shared handles every controller is built from.
#[derive(Clone)]
pub struct Site {
    pub dataset: Rc<Dataset>,
    pub store: Store,
    pub favorites: Rc<FavoritesStore<Store>>,
    pub toast: Rc<Toast>,
}

impl Site {
    pub fn load() -> Self {
        let store = Rc::new(LocalStore::open());
        Self {
            dataset: Rc::new(crate::data::load()),
            favorites: Rc::new(FavoritesStore::new(Rc::clone(&store))),
            store,
            toast: Rc::new(Toast::default()),
        }
    }

    /// Grid markup for `vehicles` with current favorite state.
    pub fn cards<'a>(&self, vehicles: impl IntoIterator<Item = &'a autodrive_core::Vehicle>) -> String {
        autodrive_core::render::car_cards(vehicles, &self.favorites)
    }
}
