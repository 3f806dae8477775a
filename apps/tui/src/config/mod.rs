//! Runtime configuration from the environment (and `.env`).

use autodrive_core::{Dataset, DatasetError};
use color_eyre::eyre::{eyre, WrapErr};
use dotenv::dotenv;
use std::env;
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

pub const DEFAULT_STORE: &str = "autodrive-store.json";
pub const LOG_FILE: &str = "autodrive-tui.log";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub store_path: PathBuf,
    pub dataset_path: Option<PathBuf>,
    pub debug: bool,
}

/// Loads `.env`, then reads `AUTODRIVE_STORE`, `AUTODRIVE_DATASET` and
/// `DEBUG`.
pub fn init_app_config() -> AppConfig {
    dotenv().ok();

    AppConfig {
        store_path: get_store_path(),
        dataset_path: env::var("AUTODRIVE_DATASET")
            .ok()
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from),
        debug: env::var("DEBUG").is_ok_and(|value| value == "1"),
    }
}

pub fn get_store_path() -> PathBuf {
    env::var("AUTODRIVE_STORE").map_or_else(|_| PathBuf::from(DEFAULT_STORE), PathBuf::from)
}

/// Bundled catalogue unless a dataset file is configured.
pub fn load_dataset(config: &AppConfig) -> color_eyre::Result<Dataset> {
    let Some(path) = &config.dataset_path else {
        return Ok(Dataset::bundled());
    };
    read_dataset(path)
}

fn read_dataset(path: &Path) -> color_eyre::Result<Dataset> {
    let raw = fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read dataset `{}`", path.display()))?;
    Dataset::from_json(&raw).map_err(|e: DatasetError| eyre!("{}: {e}", path.display()))
}

/// Routes `tracing` output to the log file. The alternate screen owns stdout,
/// so nothing is installed unless debugging.
pub fn init_logging(config: &AppConfig) -> color_eyre::Result<()> {
    if !config.debug {
        return Ok(());
    }

    let file = File::create(LOG_FILE).wrap_err("failed to create log file")?;
    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .try_init()
        .map_err(|e| eyre!("failed to install logger: {e}"))?;

    eprintln!("Debug logging to {LOG_FILE}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn bundled_catalogue_without_override() {
        let config = AppConfig {
            store_path: PathBuf::from(DEFAULT_STORE),
            dataset_path: None,
            debug: false,
        };

        assert!(!load_dataset(&config).unwrap().is_empty());
    }

    #[test]
    fn dataset_override_is_read_from_disk() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cars.json");
        fs::write(&path, "[]").unwrap();
        let config = AppConfig {
            store_path: PathBuf::from(DEFAULT_STORE),
            dataset_path: Some(path),
            debug: false,
        };

        assert!(load_dataset(&config).unwrap().is_empty());
    }

    #[test]
    fn malformed_dataset_override_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cars.json");
        fs::write(&path, "{\"not\": \"a list\"}").unwrap();

        assert!(read_dataset(&path).is_err());
    }
}
