use clap::Parser;

#[derive(Debug, Default, Parser)]
#[command(name = "autodrive-tui", version, about = "AutoDrive showroom in the terminal")]
pub struct CliArgs {
    /// Print the filtered catalogue and exit
    #[arg(long)]
    pub headless: bool,

    /// Print the headless listing as JSON
    #[arg(long)]
    pub json: bool,

    /// Write debug logs to autodrive-tui.log
    #[arg(long)]
    pub debug: bool,

    /// Override the store file path
    #[arg(long, value_name = "PATH")]
    pub store: Option<String>,

    /// Load the catalogue from a JSON file instead of the bundled one
    #[arg(long, value_name = "PATH")]
    pub dataset: Option<String>,

    /// Text filter (title, brand, model, short description)
    #[arg(long, value_name = "TEXT")]
    pub search: Option<String>,

    /// Body type filter: sedan, crossover, hatchback or all
    #[arg(long = "type", value_name = "TYPE")]
    pub category: Option<String>,

    /// Sort mode: price-asc, price-desc, year-desc, year-asc, popular
    #[arg(long, value_name = "MODE")]
    pub sort: Option<String>,

    /// Only list favorites
    #[arg(long = "favorites-only")]
    pub favorites_only: bool,
}

impl CliArgs {
    pub fn apply_env_overrides(&self) {
        if let Some(store) = &self.store {
            std::env::set_var("AUTODRIVE_STORE", store);
        }
        if let Some(dataset) = &self.dataset {
            std::env::set_var("AUTODRIVE_DATASET", dataset);
        }
        if self.debug {
            std::env::set_var("DEBUG", "1");
        }
    }
}
