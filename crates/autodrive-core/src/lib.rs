// Export our modules for use by the web and terminal front-ends
pub mod catalog;
pub mod command;
pub mod dataset;
pub mod detail;
pub mod domain;
pub mod favorites;
pub mod format;
pub mod forms;
pub mod notice;
pub mod pages;
pub mod render;
pub mod slider;
pub mod storage;
pub mod theme;

pub use catalog::{CatalogView, Selection, SortMode};
pub use command::{Command, Effect, FavoriteStyle, Interpreter};
pub use dataset::{Dataset, DatasetError};
pub use domain::{Category, Vehicle};
pub use favorites::{ChangeKind, FavoritesChange, FavoritesStore, Subscription};
pub use notice::Notice;
pub use pages::Page;
pub use storage::{KeyValueStore, MemoryStore, StorageError};
pub use theme::Theme;
