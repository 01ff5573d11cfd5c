use crate::{
    expense_presenter::ExpensePresenter,
    format_money,
    text_table::{Alignment, TextTableBuilder, join_sections},
};
use rust_decimal::{Decimal, RoundingStrategy};
use std::borrow::Cow;
use tripsplit_application::{DashboardSummary, LocationGroup, Report, ReportPeriod};
use tripsplit_i18n as i18n;

const DAILY_ROWS: usize = 7;

pub struct ReportPresenter;

impl ReportPresenter {
    pub fn render(report: &Report) -> String {
        let heading =
            i18n::report_heading(period_label(report.period), report.expense_count).to_string();
        let totals = Self::build_totals_table(&[
            (i18n::TOTAL_EXPENSES, format_money(report.total)),
            (i18n::AVERAGE_DAILY, format_money(report.average_daily)),
        ]);

        let categories = TextTableBuilder::new()
            .alignments(&[Alignment::Left, Alignment::Right, Alignment::Right])
            .headers(&[
                Cow::Borrowed(i18n::CATEGORY),
                Cow::Borrowed(i18n::AMOUNT),
                Cow::Borrowed(i18n::PERCENT),
            ])
            .rows(report.categories.iter().map(|category| {
                [
                    Cow::Borrowed(category.category.as_str()),
                    Cow::Owned(format_money(category.amount)),
                    Cow::Owned(format_percentage(category.percentage)),
                ]
            }))
            .build();

        let skip = report.daily.len().saturating_sub(DAILY_ROWS);
        let daily = TextTableBuilder::new()
            .alignments(&[Alignment::Left, Alignment::Right])
            .headers(&[Cow::Borrowed(i18n::DATE), Cow::Borrowed(i18n::AMOUNT)])
            .rows(report.daily.iter().skip(skip).map(|(date, amount)| {
                [Cow::Owned(date.to_string()), Cow::Owned(format_money(*amount))]
            }))
            .build();

        let locations = if report.top_locations.is_empty() {
            String::new()
        } else {
            TextTableBuilder::new()
                .alignments(&[Alignment::Left, Alignment::Right])
                .headers(&[Cow::Borrowed(i18n::LOCATION), Cow::Borrowed(i18n::AMOUNT)])
                .rows(report.top_locations.iter().map(|location| {
                    [
                        Cow::Borrowed(location.address.as_str()),
                        Cow::Owned(format_money(location.amount)),
                    ]
                }))
                .build()
        };

        if report.expense_count == 0 {
            return join_sections([heading.as_str(), totals.as_str(), i18n::NO_EXPENSES]);
        }

        let categories = titled(i18n::BY_CATEGORY, &categories);
        let daily = titled(i18n::DAILY_SPENDING, &daily);
        let locations = titled(i18n::TOP_LOCATIONS, &locations);
        join_sections([
            heading.as_str(),
            totals.as_str(),
            categories.as_str(),
            daily.as_str(),
            locations.as_str(),
        ])
    }

    pub fn render_dashboard(summary: &DashboardSummary) -> String {
        let totals = Self::build_totals_table(&[
            (i18n::TOTAL_EXPENSES, format_money(summary.total)),
            (i18n::THIS_MONTH, format_money(summary.this_month)),
            (i18n::GROUPS, summary.group_count.to_string()),
            (i18n::MEMBERS, summary.member_count.to_string()),
            (i18n::LOCATIONS, summary.location_count.to_string()),
        ]);

        let recent = if summary.recent.is_empty() {
            i18n::NO_EXPENSES.to_owned()
        } else {
            ExpensePresenter::build_expense_table(summary.recent.iter())
        };
        let recent = titled(i18n::RECENT_EXPENSES, &recent);

        join_sections([totals.as_str(), recent.as_str()])
    }

    pub fn render_locations(groups: &[LocationGroup<'_>]) -> String {
        if groups.is_empty() {
            return i18n::NO_LOCATIONS.to_owned();
        }

        TextTableBuilder::new()
            .alignments(&[Alignment::Left, Alignment::Right, Alignment::Right])
            .headers(&[
                Cow::Borrowed(i18n::LOCATION),
                Cow::Borrowed(i18n::EXPENSES),
                Cow::Borrowed(i18n::TOTAL),
            ])
            .rows(groups.iter().map(|group| {
                [
                    Cow::Borrowed(group.location.address.as_str()),
                    Cow::Owned(group.expenses.len().to_string()),
                    Cow::Owned(format_money(group.total)),
                ]
            }))
            .build()
    }

    fn build_totals_table(rows: &[(&str, String)]) -> String {
        rows.iter()
            .map(|(label, value)| format!("{label}: {value}"))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn titled(title: &str, body: &str) -> String {
    if body.is_empty() {
        return String::new();
    }
    format!("{title}\n{body}")
}

fn format_percentage(percentage: Decimal) -> String {
    let rounded = percentage.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
    format!("{rounded:.1}%")
}

fn period_label(period: ReportPeriod) -> &'static str {
    match period {
        ReportPeriod::Week => i18n::PERIOD_WEEK,
        ReportPeriod::Month => i18n::PERIOD_MONTH,
        ReportPeriod::Year => i18n::PERIOD_YEAR,
        ReportPeriod::All => i18n::PERIOD_ALL,
    }
}
