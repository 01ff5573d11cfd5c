use crate::model::AppState;
use tripsplit_domain::{
    BalanceCalculator, MemberBalances, Money, ParticipantResolver, SettlementCalculator, Transfer,
    apply_transfers,
    services::{paid_by_payer, total},
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParticipantPaid {
    pub name: String,
    pub paid: Money,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SplitSummary {
    pub total: Money,
    pub selected: Vec<String>,
    pub available: Vec<ParticipantPaid>,
    pub balances: MemberBalances,
    pub transfers: Vec<Transfer>,
}

impl SplitSummary {
    pub fn is_settled(&self) -> bool {
        self.transfers.is_empty()
    }
}

pub struct SplitSummaryService {
    balances: BalanceCalculator,
    settlements: SettlementCalculator,
}

impl SplitSummaryService {
    pub fn new(settlements: SettlementCalculator) -> Self {
        Self {
            balances: BalanceCalculator,
            settlements,
        }
    }

    /// Names that can be offered for selection, with what each has paid.
    pub fn available(&self, state: &AppState) -> Vec<ParticipantPaid> {
        let paid = paid_by_payer(&state.expenses);
        ParticipantResolver::available(&state.members, &state.expenses)
            .into_iter()
            .map(|name| {
                let paid = paid.get(name.as_str()).copied().unwrap_or(Money::ZERO);
                ParticipantPaid { name, paid }
            })
            .collect()
    }

    pub fn summarize<S: AsRef<str>>(&self, state: &AppState, selected: &[S]) -> SplitSummary {
        let balances = self
            .balances
            .compute(&state.expenses, selected.iter().map(|name| name.as_ref()));
        let transfers = self.settlements.calculate(&balances);

        let epsilon = self.settlements.epsilon();
        let residual = apply_transfers(&balances, &transfers);
        let unsettled: Vec<(&String, &Money)> = residual
            .iter()
            .filter(|(_, owes)| owes.abs() > epsilon)
            .collect();
        if !unsettled.is_empty() {
            tracing::debug!(?unsettled, "Residual balance left after settlement");
        }

        SplitSummary {
            total: total(&state.expenses),
            selected: balances.keys().cloned().collect(),
            available: self.available(state),
            balances,
            transfers,
        }
    }
}

impl Default for SplitSummaryService {
    fn default() -> Self {
        Self::new(SettlementCalculator::default())
    }
}
