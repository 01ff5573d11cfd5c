use crate::{
    draft::{ExpenseDraft, GroupDraft, MemberDraft},
    error::{RecordKind, StoreError},
    model::{Action, AppState},
    ports::{IdGenerator, StateRepository},
    reducer::reduce,
};
use chrono::Utc;
use tripsplit_domain::{Expense, ExpenseId, GroupId, MemberId};

/// Owns the application state for one session.
///
/// Every change goes through [`ExpenseStore::dispatch`], which reduces the
/// action and then saves the resulting snapshot. The in-memory state only
/// advances once the save succeeded.
pub struct ExpenseStore<R, G> {
    state: AppState,
    repository: R,
    ids: G,
}

impl<R, G> ExpenseStore<R, G>
where
    R: StateRepository,
    G: IdGenerator,
{
    pub fn open(repository: R, ids: G) -> Result<Self, StoreError> {
        let state = match repository.load()? {
            Some(state) => {
                tracing::info!(
                    expenses = state.expenses.len(),
                    members = state.members.len(),
                    groups = state.groups.len(),
                    "Loaded saved state"
                );
                state
            }
            None => {
                tracing::info!("No saved state found, starting fresh");
                AppState::default()
            }
        };

        Ok(Self {
            state,
            repository,
            ids,
        })
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn into_state(self) -> AppState {
        self.state
    }

    pub fn dispatch(&mut self, action: Action) -> Result<(), StoreError> {
        let name = action.name();
        let next = reduce(self.state.clone(), action);
        if let Err(err) = self.repository.save(&next) {
            tracing::error!(action = name, error = %err, "Failed to save state");
            return Err(err.into());
        }
        tracing::debug!(action = name, "State saved");
        self.state = next;
        Ok(())
    }

    pub fn add_expense(&mut self, draft: ExpenseDraft) -> Result<ExpenseId, StoreError> {
        let id = ExpenseId(self.ids.next_id());
        let expense = draft.into_expense(id, Some(Utc::now()))?;
        self.dispatch(Action::AddExpense(expense))?;
        Ok(id)
    }

    /// Replaces an expense's fields, keeping its id and creation time.
    pub fn update_expense(&mut self, id: ExpenseId, draft: ExpenseDraft) -> Result<(), StoreError> {
        let existing = self.require_expense(id)?;
        let expense = draft.into_expense(id, existing.timestamp)?;
        self.dispatch(Action::UpdateExpense(expense))
    }

    pub fn delete_expense(&mut self, id: ExpenseId) -> Result<(), StoreError> {
        self.require_expense(id)?;
        self.dispatch(Action::DeleteExpense(id))
    }

    pub fn add_member(&mut self, draft: MemberDraft) -> Result<MemberId, StoreError> {
        let id = MemberId(self.ids.next_id());
        let member = draft.into_member(id)?;
        self.dispatch(Action::AddMember(member))?;
        Ok(id)
    }

    pub fn update_member(&mut self, id: MemberId, draft: MemberDraft) -> Result<(), StoreError> {
        if self.state.member(id).is_none() {
            return Err(not_found(RecordKind::Member, id.0));
        }
        let member = draft.into_member(id)?;
        self.dispatch(Action::UpdateMember(member))
    }

    pub fn delete_member(&mut self, id: MemberId) -> Result<(), StoreError> {
        if self.state.member(id).is_none() {
            return Err(not_found(RecordKind::Member, id.0));
        }
        self.dispatch(Action::DeleteMember(id))
    }

    pub fn add_group(&mut self, draft: GroupDraft) -> Result<GroupId, StoreError> {
        let id = GroupId(self.ids.next_id());
        let group = draft.into_group(id)?;
        self.dispatch(Action::AddGroup(group))?;
        Ok(id)
    }

    pub fn update_group(&mut self, id: GroupId, draft: GroupDraft) -> Result<(), StoreError> {
        if self.state.group(id).is_none() {
            return Err(not_found(RecordKind::Group, id.0));
        }
        let group = draft.into_group(id)?;
        self.dispatch(Action::UpdateGroup(group))
    }

    pub fn delete_group(&mut self, id: GroupId) -> Result<(), StoreError> {
        if self.state.group(id).is_none() {
            return Err(not_found(RecordKind::Group, id.0));
        }
        self.dispatch(Action::DeleteGroup(id))
    }

    fn require_expense(&self, id: ExpenseId) -> Result<&Expense, StoreError> {
        self.state
            .expense(id)
            .ok_or_else(|| not_found(RecordKind::Expense, id.0))
    }
}

fn not_found(kind: RecordKind, id: u64) -> StoreError {
    StoreError::NotFound { kind, id }
}
