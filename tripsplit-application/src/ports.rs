use crate::{error::RepositoryError, model::AppState};

/// Where the application snapshot lives between runs.
pub trait StateRepository: Send + Sync {
    /// Returns `None` when nothing has been saved yet.
    fn load(&self) -> Result<Option<AppState>, RepositoryError>;

    fn save(&self, state: &AppState) -> Result<(), RepositoryError>;
}

pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> u64;
}
