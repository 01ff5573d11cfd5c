use std::sync::{Mutex, PoisonError};
use tripsplit_application::{AppState, RepositoryError, StateRepository};

/// Holds the snapshot in process memory. Nothing survives a restart.
#[derive(Debug, Default)]
pub struct InMemoryRepository {
    snapshot: Mutex<Option<AppState>>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_state(state: AppState) -> Self {
        Self {
            snapshot: Mutex::new(Some(state)),
        }
    }
}

impl StateRepository for InMemoryRepository {
    fn load(&self) -> Result<Option<AppState>, RepositoryError> {
        let snapshot = self.snapshot.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(snapshot.clone())
    }

    fn save(&self, state: &AppState) -> Result<(), RepositoryError> {
        let mut snapshot = self.snapshot.lock().unwrap_or_else(PoisonError::into_inner);
        *snapshot = Some(state.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::sync::atomic::{AtomicU64, Ordering};
    use tripsplit_application::{ExpenseDraft, ExpenseStore, IdGenerator, MemberDraft};
    use tripsplit_domain::Money;

    #[derive(Default)]
    struct Counter(AtomicU64);

    impl IdGenerator for Counter {
        fn next_id(&self) -> u64 {
            self.0.fetch_add(1, Ordering::SeqCst) + 1
        }
    }

    #[test]
    fn starts_empty() {
        assert!(InMemoryRepository::new().load().expect("load").is_none());
    }

    #[test]
    fn seeded_state_is_loaded_by_store() {
        let seeded = AppState {
            categories: vec!["Snacks".to_owned()],
            ..AppState::default()
        };
        let store = ExpenseStore::open(
            InMemoryRepository::with_state(seeded.clone()),
            Counter::default(),
        )
        .expect("open");

        assert_eq!(store.state(), &seeded);
    }

    #[test]
    fn store_changes_are_kept() {
        let mut store =
            ExpenseStore::open(InMemoryRepository::new(), Counter::default())
                .expect("open");
        store.add_member(MemberDraft::new("Alice")).expect("member");
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).expect("date");
        store
            .add_expense(
                ExpenseDraft::new("Museum", Money::from_i64(18), "Activities", date)
                    .paid_by("Alice"),
            )
            .expect("expense");

        let saved = store.into_state();

        assert_eq!(saved.members.len(), 1);
        assert_eq!(saved.expenses[0].paid_by.as_deref(), Some("Alice"));
    }
}
