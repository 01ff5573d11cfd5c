use crate::model::{Balance, MemberBalances, Money, Outlay};
use indexmap::IndexSet;
use std::collections::HashMap;

/// Balance calculation service
pub struct BalanceCalculator;

impl BalanceCalculator {
    /// Calculate each selected participant's net position
    ///
    /// The whole expense total is split evenly across the selection, whoever
    /// paid it. Payers outside the selection still add to the total.
    ///
    /// # Arguments
    /// * `expenses` - Every recorded expense
    /// * `selected` - Participant names sharing the total; duplicates are ignored
    ///
    /// # Returns
    /// Balances in selection order, or an empty map for an empty selection
    pub fn compute<'a, E, I>(&self, expenses: &[E], selected: I) -> MemberBalances
    where
        E: Outlay,
        I: IntoIterator<Item = &'a str>,
    {
        let selected: IndexSet<&str> = selected.into_iter().collect();
        let Some(share) = total(expenses).split_evenly(selected.len()) else {
            return MemberBalances::new();
        };

        let paid_by = paid_by_payer(expenses);

        selected
            .into_iter()
            .map(|name| {
                let paid = paid_by.get(name).copied().unwrap_or(Money::ZERO);
                let balance = Balance {
                    paid,
                    owes: share - paid,
                    share,
                };
                (name.to_owned(), balance)
            })
            .collect()
    }
}

pub fn total<E: Outlay>(expenses: &[E]) -> Money {
    expenses.iter().map(Outlay::amount).sum()
}

/// Sums amounts per payer; expenses without a payer are skipped.
pub fn paid_by_payer<E: Outlay>(expenses: &[E]) -> HashMap<&str, Money> {
    let mut paid: HashMap<&str, Money> = HashMap::new();
    for expense in expenses {
        if let Some(payer) = expense.payer() {
            *paid.entry(payer).or_insert(Money::ZERO) += expense.amount();
        }
    }
    paid
}
