use indexmap::IndexMap;
use tripsplit_domain::{Expense, Location, Money};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortKey {
    /// Newest first.
    #[default]
    Date,
    /// Largest first.
    Amount,
    /// Alphabetical.
    Category,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExpenseQuery {
    pub search: String,
    pub category: Option<String>,
    pub sort: SortKey,
}

pub struct QueryResult<'a> {
    pub expenses: Vec<&'a Expense>,
    pub total: Money,
}

impl ExpenseQuery {
    pub fn run<'a>(&self, expenses: &'a [Expense]) -> QueryResult<'a> {
        let needle = self.search.to_lowercase();
        let mut matches: Vec<&Expense> = expenses
            .iter()
            .filter(|expense| expense.description.to_lowercase().contains(&needle))
            .filter(|expense| {
                self.category
                    .as_deref()
                    .is_none_or(|category| expense.category == category)
            })
            .collect();

        match self.sort {
            SortKey::Date => matches.sort_by(|lhs, rhs| rhs.date.cmp(&lhs.date)),
            SortKey::Amount => matches.sort_by(|lhs, rhs| rhs.amount.cmp(&lhs.amount)),
            SortKey::Category => matches.sort_by(|lhs, rhs| lhs.category.cmp(&rhs.category)),
        }

        let total = matches.iter().map(|expense| expense.amount).sum();
        QueryResult {
            expenses: matches,
            total,
        }
    }
}

#[derive(Debug)]
pub struct LocationGroup<'a> {
    pub location: &'a Location,
    pub expenses: Vec<&'a Expense>,
    pub total: Money,
}

/// Groups located expenses by address, in order of first appearance.
pub fn location_groups<'a>(
    expenses: &'a [Expense],
    category: Option<&str>,
) -> Vec<LocationGroup<'a>> {
    let mut groups: IndexMap<&str, LocationGroup<'a>> = IndexMap::new();
    for expense in expenses {
        let Some(location) = expense.location.as_ref() else {
            continue;
        };
        if category.is_some_and(|category| expense.category != category) {
            continue;
        }

        let group = groups
            .entry(location.address.as_str())
            .or_insert_with(|| LocationGroup {
                location,
                expenses: Vec::new(),
                total: Money::ZERO,
            });
        group.expenses.push(expense);
        group.total += expense.amount;
    }
    groups.into_values().collect()
}
