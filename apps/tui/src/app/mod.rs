// App module for autodrive_tui
// Handles application state and screen input

pub mod input;
pub mod state;

pub use input::handle_input;
pub use state::{App, AppScreen, Store};
