use crate::model::{MemberBalances, Money, Transfer};
use indexmap::IndexMap;

/// Settlement calculation service
///
/// Matches the largest remaining debtor with the largest remaining creditor
/// until either side runs out. Amounts at or below `epsilon` are treated as
/// settled.
#[derive(Clone, Copy, Debug)]
pub struct SettlementCalculator {
    epsilon: Money,
}

struct Position<'a> {
    name: &'a str,
    remaining: Money,
}

impl SettlementCalculator {
    pub fn new() -> Self {
        Self {
            epsilon: Money::CENT,
        }
    }

    pub fn with_epsilon(epsilon: Money) -> Self {
        Self {
            epsilon: epsilon.abs(),
        }
    }

    pub fn epsilon(&self) -> Money {
        self.epsilon
    }

    /// Calculate the payments that settle every balance
    ///
    /// # Arguments
    /// * `balances` - Balance table produced by the balance calculator
    ///
    /// # Returns
    /// Transfers from debtors to creditors, largest pairings first
    pub fn calculate(&self, balances: &MemberBalances) -> Vec<Transfer> {
        let mut creditors: Vec<Position> = Vec::new();
        let mut debtors: Vec<Position> = Vec::new();

        for (name, balance) in balances {
            if balance.owes < -self.epsilon {
                creditors.push(Position {
                    name,
                    remaining: balance.owes.abs(),
                });
            } else if balance.owes > self.epsilon {
                debtors.push(Position {
                    name,
                    remaining: balance.owes,
                });
            }
        }

        // Stable sorts keep input order among equal amounts.
        creditors.sort_by(|lhs, rhs| rhs.remaining.cmp(&lhs.remaining));
        debtors.sort_by(|lhs, rhs| rhs.remaining.cmp(&lhs.remaining));

        let mut transfers = Vec::new();
        let (mut i, mut j) = (0, 0);

        while i < creditors.len() && j < debtors.len() {
            let creditor = &mut creditors[i];
            let debtor = &mut debtors[j];

            let amount = creditor.remaining.min(debtor.remaining);
            if amount > self.epsilon {
                transfers.push(Transfer {
                    from: debtor.name.to_owned(),
                    to: creditor.name.to_owned(),
                    amount,
                });
            }

            creditor.remaining -= amount;
            debtor.remaining -= amount;

            // A zero remainder always advances, so a zero epsilon still terminates.
            if creditor.remaining < self.epsilon || creditor.remaining.is_zero() {
                i += 1;
            }
            if debtor.remaining < self.epsilon || debtor.remaining.is_zero() {
                j += 1;
            }
        }

        transfers
    }
}

impl Default for SettlementCalculator {
    fn default() -> Self {
        Self::new()
    }
}

/// Replays transfers onto the `owes` column.
///
/// Returns what each participant still owes afterwards; a fully settled
/// table is zero everywhere.
pub fn apply_transfers(
    balances: &MemberBalances,
    transfers: &[Transfer],
) -> IndexMap<String, Money> {
    let mut remaining: IndexMap<String, Money> = balances
        .iter()
        .map(|(name, balance)| (name.clone(), balance.owes))
        .collect();

    for transfer in transfers {
        if let Some(owes) = remaining.get_mut(transfer.from.as_str()) {
            *owes -= transfer.amount;
        }
        if let Some(owes) = remaining.get_mut(transfer.to.as_str()) {
            *owes += transfer.amount;
        }
    }

    remaining
}
