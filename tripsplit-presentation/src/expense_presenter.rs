use crate::{
    format_money,
    text_table::{Alignment, TextTableBuilder},
};
use std::borrow::Cow;
use tripsplit_application::QueryResult;
use tripsplit_domain::{Expense, Group, Member};
use tripsplit_i18n as i18n;

pub struct ExpensePresenter;

impl ExpensePresenter {
    pub fn render_expenses(result: &QueryResult<'_>) -> String {
        if result.expenses.is_empty() {
            return i18n::NO_EXPENSES.to_owned();
        }
        let table = Self::build_expense_table(result.expenses.iter().copied());
        format!("{table}\n\n{}: {}", i18n::TOTAL, format_money(result.total))
    }

    pub fn build_expense_table<'a>(expenses: impl IntoIterator<Item = &'a Expense>) -> String {
        TextTableBuilder::new()
            .alignments(&[
                Alignment::Right,
                Alignment::Left,
                Alignment::Left,
                Alignment::Left,
                Alignment::Left,
                Alignment::Right,
            ])
            .headers(&[
                Cow::Borrowed(i18n::ID),
                Cow::Borrowed(i18n::DATE),
                Cow::Borrowed(i18n::DESCRIPTION),
                Cow::Borrowed(i18n::CATEGORY),
                Cow::Borrowed(i18n::PAID_BY),
                Cow::Borrowed(i18n::AMOUNT),
            ])
            .rows(expenses.into_iter().map(|expense| {
                [
                    Cow::Owned(expense.id.to_string()),
                    Cow::Owned(expense.date.to_string()),
                    Cow::Borrowed(expense.description.as_str()),
                    Cow::Borrowed(expense.category.as_str()),
                    Cow::Borrowed(expense.paid_by.as_deref().unwrap_or_default()),
                    Cow::Owned(format_money(expense.amount)),
                ]
            }))
            .build()
    }

    pub fn render_members(members: &[Member]) -> String {
        TextTableBuilder::new()
            .alignments(&[Alignment::Right])
            .headers(&[
                Cow::Borrowed(i18n::ID),
                Cow::Borrowed(i18n::NAME),
                Cow::Borrowed(i18n::EMAIL),
                Cow::Borrowed(i18n::PHONE),
            ])
            .rows(members.iter().map(|member| {
                [
                    Cow::Owned(member.id.to_string()),
                    Cow::Borrowed(member.name.as_str()),
                    Cow::Borrowed(member.email.as_deref().unwrap_or_default()),
                    Cow::Borrowed(member.phone.as_deref().unwrap_or_default()),
                ]
            }))
            .build()
    }

    pub fn render_groups(groups: &[Group]) -> String {
        TextTableBuilder::new()
            .alignments(&[Alignment::Right])
            .headers(&[
                Cow::Borrowed(i18n::ID),
                Cow::Borrowed(i18n::NAME),
                Cow::Borrowed(i18n::DESCRIPTION),
            ])
            .rows(groups.iter().map(|group| {
                [
                    Cow::Owned(group.id.to_string()),
                    Cow::Borrowed(group.name.as_str()),
                    Cow::Borrowed(group.description.as_deref().unwrap_or_default()),
                ]
            }))
            .build()
    }
}
