pub mod balance_calculator;
pub mod participant_resolver;
pub mod settlement_calculator;

pub use balance_calculator::{BalanceCalculator, paid_by_payer, total};
pub use participant_resolver::ParticipantResolver;
pub use settlement_calculator::{SettlementCalculator, apply_transfers};
