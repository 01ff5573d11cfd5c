use crate::model::AppState;
use chrono::{Datelike, Duration, NaiveDate};
use indexmap::{IndexMap, IndexSet};
use rust_decimal::Decimal;
use std::collections::BTreeMap;
use tripsplit_domain::{Expense, Money};

const TOP_LOCATION_LIMIT: usize = 5;
const RECENT_LIMIT: usize = 5;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ReportPeriod {
    Week,
    #[default]
    Month,
    Year,
    All,
}

impl ReportPeriod {
    /// Whether an expense dated `date` falls in this period as seen on `today`.
    ///
    /// `Week` covers the last seven days and anything dated later.
    pub fn contains(self, date: NaiveDate, today: NaiveDate) -> bool {
        match self {
            ReportPeriod::Week => date >= today - Duration::days(7),
            ReportPeriod::Month => same_month(date, today),
            ReportPeriod::Year => date.year() == today.year(),
            ReportPeriod::All => true,
        }
    }
}

fn same_month(date: NaiveDate, today: NaiveDate) -> bool {
    date.year() == today.year() && date.month() == today.month()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryTotal {
    pub category: String,
    pub amount: Money,
    /// Share of the period total, 0 to 100.
    pub percentage: Decimal,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LocationTotal {
    pub address: String,
    pub amount: Money,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Report {
    pub period: ReportPeriod,
    pub total: Money,
    pub expense_count: usize,
    pub categories: Vec<CategoryTotal>,
    pub daily: BTreeMap<NaiveDate, Money>,
    pub top_locations: Vec<LocationTotal>,
    pub average_daily: Money,
}

pub struct ReportBuilder;

impl ReportBuilder {
    pub fn build(expenses: &[Expense], period: ReportPeriod, today: NaiveDate) -> Report {
        let current: Vec<&Expense> = expenses
            .iter()
            .filter(|expense| period.contains(expense.date, today))
            .collect();
        let total: Money = current.iter().map(|expense| expense.amount).sum();

        let mut by_category: IndexMap<&str, Money> = IndexMap::new();
        let mut by_location: IndexMap<&str, Money> = IndexMap::new();
        let mut daily: BTreeMap<NaiveDate, Money> = BTreeMap::new();
        for expense in &current {
            *by_category
                .entry(expense.category.as_str())
                .or_insert(Money::ZERO) += expense.amount;
            *daily.entry(expense.date).or_insert(Money::ZERO) += expense.amount;
            if let Some(address) = expense.address() {
                *by_location.entry(address).or_insert(Money::ZERO) += expense.amount;
            }
        }

        let mut categories: Vec<CategoryTotal> = by_category
            .into_iter()
            .map(|(category, amount)| CategoryTotal {
                category: category.to_owned(),
                amount,
                percentage: percentage(amount, total),
            })
            .collect();
        categories.sort_by(|lhs, rhs| rhs.amount.cmp(&lhs.amount));

        let mut top_locations: Vec<LocationTotal> = by_location
            .into_iter()
            .map(|(address, amount)| LocationTotal {
                address: address.to_owned(),
                amount,
            })
            .collect();
        top_locations.sort_by(|lhs, rhs| rhs.amount.cmp(&lhs.amount));
        top_locations.truncate(TOP_LOCATION_LIMIT);

        let average_daily = total.split_evenly(daily.len().max(1)).unwrap_or(total);

        Report {
            period,
            total,
            expense_count: current.len(),
            categories,
            daily,
            top_locations,
            average_daily,
        }
    }
}

fn percentage(amount: Money, total: Money) -> Decimal {
    if total.is_zero() {
        return Decimal::ZERO;
    }
    amount.as_decimal() / total.as_decimal() * Decimal::ONE_HUNDRED
}

#[derive(Clone, Debug, PartialEq)]
pub struct DashboardSummary {
    pub total: Money,
    pub group_count: usize,
    pub member_count: usize,
    pub location_count: usize,
    pub this_month: Money,
    /// Most recently recorded first.
    pub recent: Vec<Expense>,
}

impl DashboardSummary {
    pub fn from_state(state: &AppState, today: NaiveDate) -> Self {
        let locations: IndexSet<&str> = state.expenses.iter().filter_map(Expense::address).collect();
        let this_month = state
            .expenses
            .iter()
            .filter(|expense| same_month(expense.date, today))
            .map(|expense| expense.amount)
            .sum();

        Self {
            total: state.expenses.iter().map(|expense| expense.amount).sum(),
            group_count: state.groups.len(),
            member_count: state.members.len(),
            location_count: locations.len(),
            this_month,
            recent: state.expenses.iter().rev().take(RECENT_LIMIT).cloned().collect(),
        }
    }
}
