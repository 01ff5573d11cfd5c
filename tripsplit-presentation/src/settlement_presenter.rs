use crate::{
    format_money,
    text_table::{Alignment, TextTableBuilder, join_sections},
};
use std::borrow::Cow;
use tripsplit_application::{ParticipantPaid, SplitSummary};
use tripsplit_domain::{Balance, Transfer};
use tripsplit_i18n as i18n;

pub struct SettlementPresenter;

#[derive(Debug, PartialEq, Eq)]
pub struct SettlementView {
    pub heading: String,
    pub balance_table: String,
    pub transfer_table: Option<String>,
}

impl SettlementView {
    pub fn to_text(&self) -> String {
        match &self.transfer_table {
            Some(transfers) => join_sections([
                self.heading.as_str(),
                self.balance_table.as_str(),
                transfers.as_str(),
            ]),
            None if self.balance_table.is_empty() => self.heading.clone(),
            None => {
                let settled = format!("{}\n{}", i18n::ALL_SETTLED, i18n::NO_PAYMENTS_NEEDED);
                join_sections([
                    self.heading.as_str(),
                    self.balance_table.as_str(),
                    settled.as_str(),
                ])
            }
        }
    }
}

impl SettlementPresenter {
    pub fn render(summary: &SplitSummary) -> SettlementView {
        if summary.selected.is_empty() {
            return SettlementView {
                heading: i18n::SELECT_MEMBERS.to_owned(),
                balance_table: String::new(),
                transfer_table: None,
            };
        }

        let heading = i18n::split_total(format_money(summary.total), summary.selected.len());
        let balance_table = Self::build_balance_table(
            summary
                .balances
                .iter()
                .map(|(name, balance)| (name.as_str(), balance)),
        );
        let transfer_table =
            (!summary.transfers.is_empty()).then(|| Self::build_transfer_table(&summary.transfers));

        SettlementView {
            heading,
            balance_table,
            transfer_table,
        }
    }

    pub fn build_available_table(available: &[ParticipantPaid]) -> String {
        TextTableBuilder::new()
            .alignments(&[Alignment::Left, Alignment::Right])
            .headers(&[Cow::Borrowed(i18n::MEMBER), Cow::Borrowed(i18n::PAID)])
            .rows(available.iter().map(|participant| {
                [
                    Cow::Borrowed(participant.name.as_str()),
                    Cow::Owned(format_money(participant.paid)),
                ]
            }))
            .build()
    }

    pub fn build_balance_table<'a>(
        balances: impl IntoIterator<Item = (&'a str, &'a Balance)>,
    ) -> String {
        TextTableBuilder::new()
            .alignments(&[
                Alignment::Left,
                Alignment::Right,
                Alignment::Right,
                Alignment::Left,
            ])
            .headers(&[
                Cow::Borrowed(i18n::MEMBER),
                Cow::Borrowed(i18n::PAID),
                Cow::Borrowed(i18n::SHARE),
                Cow::Borrowed(i18n::STATUS),
            ])
            .rows(balances.into_iter().map(|(name, balance)| {
                [
                    Cow::Borrowed(name),
                    Cow::Owned(format_money(balance.paid)),
                    Cow::Owned(format_money(balance.share)),
                    status(balance),
                ]
            }))
            .build()
    }

    pub fn build_transfer_table(transfers: &[Transfer]) -> String {
        TextTableBuilder::new()
            .alignments(&[Alignment::Left, Alignment::Left, Alignment::Right])
            .headers(&[
                Cow::Borrowed(i18n::FROM),
                Cow::Borrowed(i18n::TO),
                Cow::Borrowed(i18n::AMOUNT),
            ])
            .rows(transfers.iter().map(|transfer| {
                [
                    Cow::Borrowed(transfer.from.as_str()),
                    Cow::Borrowed(transfer.to.as_str()),
                    Cow::Owned(format_money(transfer.amount)),
                ]
            }))
            .build()
    }
}

/// Status judged on the amount as displayed, so sub-cent residue reads as settled.
fn status(balance: &Balance) -> Cow<'static, str> {
    let owes = balance.owes.round_cents();
    if owes.is_positive() {
        Cow::Owned(i18n::owes(format_money(owes)))
    } else if owes.is_negative() {
        Cow::Owned(i18n::gets(format_money(owes.abs())))
    } else {
        Cow::Borrowed(i18n::SETTLED)
    }
}
