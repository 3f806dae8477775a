// Export our modules for use in the binary and tests
pub mod app;
pub mod cli;
pub mod config;
pub mod event;
pub mod store;
pub mod terminal;
pub mod ui;

pub use app::{App, AppScreen, Store};
pub use store::FileStore;
