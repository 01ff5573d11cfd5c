#![warn(clippy::uninlined_format_args)]

pub mod model;
pub mod services;

pub use model::{
    Balance, Expense, ExpenseId, Group, GroupId, Location, Member, MemberBalances, MemberId,
    Money, Outlay, Transfer,
};
pub use services::{BalanceCalculator, ParticipantResolver, SettlementCalculator, apply_transfers};
