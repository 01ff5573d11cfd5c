use crate::model::{Action, AppState};

/// Applies one action and returns the next state.
///
/// Updates and deletes that name an unknown id leave the state as it was.
pub fn reduce(state: AppState, action: Action) -> AppState {
    let mut next = state;
    match action {
        Action::AddExpense(expense) => next.expenses.push(expense),
        Action::UpdateExpense(expense) => replace_by(&mut next.expenses, expense, |e| e.id),
        Action::DeleteExpense(id) => next.expenses.retain(|expense| expense.id != id),
        Action::AddGroup(group) => next.groups.push(group),
        Action::UpdateGroup(group) => replace_by(&mut next.groups, group, |g| g.id),
        Action::DeleteGroup(id) => next.groups.retain(|group| group.id != id),
        Action::AddMember(member) => next.members.push(member),
        Action::UpdateMember(member) => replace_by(&mut next.members, member, |m| m.id),
        Action::DeleteMember(id) => next.members.retain(|member| member.id != id),
        Action::LoadData(state) => next = state,
    }
    next
}

fn replace_by<T, K, F>(items: &mut [T], replacement: T, key: F)
where
    K: PartialEq,
    F: Fn(&T) -> K,
{
    let target = key(&replacement);
    if let Some(slot) = items.iter_mut().find(|item| key(&**item) == target) {
        *slot = replacement;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rstest::{fixture, rstest};
    use tripsplit_domain::{Expense, ExpenseId, Group, GroupId, Member, MemberId, Money};

    fn expense(id: u64, amount: i64) -> Expense {
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).expect("date");
        Expense::new(ExpenseId(id), "Museum", Money::from_i64(amount), "Activities", date)
    }

    fn member(id: u64, name: &str) -> Member {
        Member {
            id: MemberId(id),
            name: name.to_owned(),
            email: None,
            phone: None,
        }
    }

    #[fixture]
    fn state() -> AppState {
        AppState {
            expenses: vec![expense(1, 10), expense(2, 20)],
            members: vec![member(1, "Alice")],
            groups: vec![Group {
                id: GroupId(1),
                name: "Lisbon".to_owned(),
                description: None,
            }],
            ..AppState::default()
        }
    }

    #[rstest]
    fn add_expense_appends(state: AppState) {
        let next = reduce(state, Action::AddExpense(expense(3, 30)));

        let ids: Vec<_> = next.expenses.iter().map(|e| e.id.0).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[rstest]
    fn update_expense_replaces_in_place(state: AppState) {
        let next = reduce(state, Action::UpdateExpense(expense(1, 99)));

        assert_eq!(next.expenses[0].amount, Money::from_i64(99));
        assert_eq!(next.expenses.len(), 2);
    }

    #[rstest]
    #[case::unknown_expense_update(Action::UpdateExpense(expense(9, 99)))]
    #[case::unknown_expense_delete(Action::DeleteExpense(ExpenseId(9)))]
    #[case::unknown_member_update(Action::UpdateMember(member(9, "Zed")))]
    #[case::unknown_member_delete(Action::DeleteMember(MemberId(9)))]
    #[case::unknown_group_delete(Action::DeleteGroup(GroupId(9)))]
    fn unknown_ids_leave_state_unchanged(state: AppState, #[case] action: Action) {
        let before = state.clone();

        assert_eq!(reduce(state, action), before);
    }

    #[rstest]
    fn delete_removes_only_matching_records(state: AppState) {
        let next = reduce(state, Action::DeleteExpense(ExpenseId(1)));
        let next = reduce(next, Action::DeleteMember(MemberId(1)));
        let next = reduce(next, Action::DeleteGroup(GroupId(1)));

        assert_eq!(next.expenses.len(), 1);
        assert_eq!(next.expenses[0].id, ExpenseId(2));
        assert!(next.members.is_empty());
        assert!(next.groups.is_empty());
    }

    #[rstest]
    fn member_and_group_updates(state: AppState) {
        let next = reduce(state, Action::UpdateMember(member(1, "Alicia")));
        let next = reduce(
            next,
            Action::UpdateGroup(Group {
                id: GroupId(1),
                name: "Porto".to_owned(),
                description: Some("Weekend".to_owned()),
            }),
        );

        assert_eq!(next.members[0].name, "Alicia");
        assert_eq!(next.groups[0].name, "Porto");
    }

    #[rstest]
    fn load_data_replaces_everything(state: AppState) {
        let next = reduce(state, Action::LoadData(AppState::default()));

        assert_eq!(next, AppState::default());
        assert_eq!(next.categories.len(), 7);
    }
}
