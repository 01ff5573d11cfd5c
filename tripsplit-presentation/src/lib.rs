#![warn(clippy::uninlined_format_args)]

pub mod error_presenter;
pub mod expense_presenter;
pub mod report_presenter;
pub mod settlement_presenter;
pub mod text_table;

pub use error_presenter::{format_draft_error, format_store_error};
pub use expense_presenter::ExpensePresenter;
pub use report_presenter::ReportPresenter;
pub use settlement_presenter::{SettlementPresenter, SettlementView};
pub use text_table::{Alignment, TextTableBuilder};

use tripsplit_domain::Money;

/// Formats an amount as dollars with two decimals, sign before the symbol.
pub fn format_money(amount: Money) -> String {
    if amount.round_cents().is_negative() {
        format!("-${}", amount.abs())
    } else {
        format!("${}", amount.abs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::whole(Money::from_i64(5), "$5.00")]
    #[case::cents(Money::new(1999, 2), "$19.99")]
    #[case::negative(Money::new(-250, 2), "-$2.50")]
    #[case::negative_rounds_to_zero(Money::new(-4, 3), "$0.00")]
    fn money_formatting(#[case] amount: Money, #[case] expected: &str) {
        assert_eq!(format_money(amount), expected);
    }
}
