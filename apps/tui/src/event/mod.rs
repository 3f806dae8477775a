mod loop_handler;

pub use loop_handler::{build_listing, headless_selection, run, run_headless, HeadlessListing};
