use autodrive_tui::cli::CliArgs;
use autodrive_tui::{config, event, terminal, App, FileStore};
use clap::Parser;
use color_eyre::Result;
use std::rc::Rc;

fn main() -> Result<()> {
    // Setup error handling
    color_eyre::install()?;

    let args = CliArgs::parse();
    args.apply_env_overrides();

    let config = config::init_app_config();
    config::init_logging(&config)?;

    let dataset = config::load_dataset(&config)?;
    let store = FileStore::new(&config.store_path);
    tracing::info!(
        vehicles = dataset.len(),
        store = %store.path().display(),
        "starting"
    );
    let mut app = App::new(dataset, Rc::new(store));

    // Check if we're running in a terminal
    if args.headless || !is_terminal() {
        let selection = event::headless_selection(&args);
        return event::run_headless(&app, &selection, args.json);
    }

    // Setup terminal
    let mut terminal = terminal::setup()?;

    // Run the application
    let result = event::run(&mut terminal, &mut app);

    // Restore terminal
    terminal::cleanup(true, true);

    result
}

// Check if we're running in a terminal
fn is_terminal() -> bool {
    atty::is(atty::Stream::Stdout)
}
