use crate::model::{Member, Outlay};
use indexmap::IndexSet;

/// Resolves the names that can take part in a split
pub struct ParticipantResolver;

impl ParticipantResolver {
    /// Known member names followed by any payer not registered as a member.
    ///
    /// Names are compared exactly; blanks are dropped and first appearance
    /// decides the order.
    pub fn available<E: Outlay>(members: &[Member], expenses: &[E]) -> Vec<String> {
        let names: IndexSet<&str> = members
            .iter()
            .map(|member| member.name.as_str())
            .chain(expenses.iter().filter_map(Outlay::payer))
            .filter(|name| !name.is_empty())
            .collect();

        names.into_iter().map(str::to_owned).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Expense, ExpenseId, MemberId, Money};
    use chrono::NaiveDate;
    use rstest::rstest;

    fn member(id: u64, name: &str) -> Member {
        Member {
            id: MemberId(id),
            name: name.to_owned(),
            email: None,
            phone: None,
        }
    }

    fn expense(id: u64, payer: Option<&str>) -> Expense {
        let date = NaiveDate::from_ymd_opt(2024, 6, 1).expect("date");
        let expense = Expense::new(ExpenseId(id), "Taxi", Money::from_i64(10), "Transportation", date);
        match payer {
            Some(payer) => expense.with_payer(payer),
            None => expense,
        }
    }

    #[rstest]
    #[case::members_then_payers(
        vec![member(1, "Alice"), member(2, "Bob")],
        vec![expense(1, Some("Carol")), expense(2, Some("Alice"))],
        vec!["Alice", "Bob", "Carol"]
    )]
    #[case::payers_only(
        vec![],
        vec![expense(1, Some("Bob")), expense(2, None), expense(3, Some("Bob"))],
        vec!["Bob"]
    )]
    #[case::blank_member_dropped(
        vec![member(1, ""), member(2, "Alice")],
        vec![],
        vec!["Alice"]
    )]
    #[case::case_sensitive(
        vec![member(1, "alice")],
        vec![expense(1, Some("Alice"))],
        vec!["alice", "Alice"]
    )]
    fn available_participants(
        #[case] members: Vec<Member>,
        #[case] expenses: Vec<Expense>,
        #[case] expected: Vec<&str>,
    ) {
        assert_eq!(ParticipantResolver::available(&members, &expenses), expected);
    }
}
