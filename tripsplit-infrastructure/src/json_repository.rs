use std::{
    fs, io,
    path::{Path, PathBuf},
};
use tripsplit_application::{AppState, RepositoryError, StateRepository};

/// Keeps the whole application state in one JSON file.
///
/// Saves go to a sibling temporary file first and are renamed over the
/// snapshot, so a crash mid-write leaves the previous snapshot intact.
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|name| name.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl StateRepository for JsonFileRepository {
    fn load(&self) -> Result<Option<AppState>, RepositoryError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "Snapshot file does not exist");
                return Ok(None);
            }
            Err(err) => return Err(err.into()),
        };

        let state = serde_json::from_str(&content).map_err(|err| {
            tracing::warn!(path = %self.path.display(), error = %err, "Snapshot could not be parsed");
            RepositoryError::Serialization(Box::new(err))
        })?;
        Ok(Some(state))
    }

    fn save(&self, state: &AppState) -> Result<(), RepositoryError> {
        let content = serde_json::to_string_pretty(state)
            .map_err(|err| RepositoryError::Serialization(Box::new(err)))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let temp = self.temp_path();
        fs::write(&temp, content)?;
        fs::rename(&temp, &self.path)?;
        tracing::debug!(path = %self.path.display(), "Snapshot written");
        Ok(())
    }
}
