use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("description is required")]
    MissingDescription,
    #[error("category is required")]
    MissingCategory,
    #[error("amount must not be negative (got {0})")]
    NegativeAmount(String),
    #[error("amount must not exceed {max} (got {0})", max = tripsplit_domain::Money::MAX_EXPENSE)]
    AmountTooLarge(String),
    #[error("amount must not have more than two decimal places (got {0})")]
    TooPrecise(String),
    #[error("name is required")]
    MissingName,
}

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("snapshot I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("snapshot is not valid: {0}")]
    Serialization(#[source] Box<dyn std::error::Error + Send + Sync>),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecordKind {
    Expense,
    Member,
    Group,
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            RecordKind::Expense => "expense",
            RecordKind::Member => "member",
            RecordKind::Group => "group",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("invalid input: {0}")]
    Draft(#[from] DraftError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error("{kind} {id} not found")]
    NotFound { kind: RecordKind, id: u64 },
}
