use std::{env, path::PathBuf};
use tracing_subscriber::EnvFilter;
use tripsplit_application::{ExpenseStore, StoreError};
use tripsplit_infrastructure::{ClockIdGenerator, JsonFileRepository};

pub const DATA_FILE_VAR: &str = "TRIPSPLIT_DATA_FILE";
pub const DEFAULT_DATA_FILE: &str = "travelExpenses.json";

pub type AppStore = ExpenseStore<JsonFileRepository, ClockIdGenerator>;

/// Application configuration
pub struct AppConfig {
    pub data_file: PathBuf,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();
        let data_file = env::var_os(DATA_FILE_VAR)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE));

        Self { data_file }
    }

    pub fn with_data_file(mut self, data_file: Option<PathBuf>) -> Self {
        if let Some(data_file) = data_file {
            self.data_file = data_file;
        }
        self
    }

    pub fn open_store(&self) -> Result<AppStore, StoreError> {
        tracing::debug!(path = %self.data_file.display(), "Opening snapshot");
        ExpenseStore::open(
            JsonFileRepository::new(&self.data_file),
            ClockIdGenerator::new(),
        )
    }
}

/// Logs go to stderr, filtered by `RUST_LOG` (default `warn`).
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_overrides_configured_file() {
        let config = AppConfig {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
        }
        .with_data_file(Some(PathBuf::from("trip.json")));

        assert_eq!(config.data_file, PathBuf::from("trip.json"));
    }

    #[test]
    fn missing_flag_keeps_configured_file() {
        let config = AppConfig {
            data_file: PathBuf::from("from-env.json"),
        }
        .with_data_file(None);

        assert_eq!(config.data_file, PathBuf::from("from-env.json"));
    }
}
