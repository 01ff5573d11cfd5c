use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::collections::HashSet;
use tripsplit_domain::{
    Balance, BalanceCalculator, MemberBalances, Money, Outlay, SettlementCalculator, Transfer,
    apply_transfers,
};

const NAMES: [&str; 6] = ["Alice", "Bob", "Carol", "Dave", "Erin", "Frank"];

#[derive(Debug, Clone)]
struct Paid {
    amount: Money,
    payer: Option<&'static str>,
}

impl Outlay for Paid {
    fn amount(&self) -> Money {
        self.amount
    }

    fn payer(&self) -> Option<&str> {
        self.payer
    }
}

fn expenses_strategy() -> impl Strategy<Value = Vec<Paid>> {
    prop::collection::vec(
        (0i64..=1_000_000, prop::option::weighted(0.9, 0usize..NAMES.len())),
        0..=30,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .map(|(cents, payer)| Paid {
                amount: Money::new(cents, 2),
                payer: payer.map(|idx| NAMES[idx]),
            })
            .collect()
    })
}

fn selection(mask: usize) -> Vec<&'static str> {
    NAMES
        .iter()
        .enumerate()
        .filter(|(idx, _)| mask & (1 << idx) != 0)
        .map(|(_, name)| *name)
        .collect()
}

/// Expenses paid only by selected participants, so the selection covers
/// the whole total.
fn closed_split() -> impl Strategy<Value = (Vec<&'static str>, Vec<Paid>)> {
    (
        1usize..(1 << NAMES.len()),
        prop::collection::vec((0i64..=1_000_000, any::<prop::sample::Index>()), 0..=30),
    )
        .prop_map(|(mask, rows)| {
            let selected = selection(mask);
            let expenses = rows
                .into_iter()
                .map(|(cents, payer)| Paid {
                    amount: Money::new(cents, 2),
                    payer: Some(*payer.get(&selected)),
                })
                .collect();
            (selected, expenses)
        })
}

proptest! {
    #[test]
    fn owes_sum_to_zero((selected, expenses) in closed_split()) {
        let balances = BalanceCalculator.compute(&expenses, selected);

        let sum: Money = balances.values().map(|balance| balance.owes).sum();
        prop_assert!(sum.as_decimal().abs() < dec!(0.000000001));
    }
}

proptest! {
    // Payers outside the selection and unpaid expenses leave exactly their
    // amount unaccounted for.
    #[test]
    fn owes_sum_to_unattributed_amount(
        expenses in expenses_strategy(),
        mask in 1usize..(1 << NAMES.len()),
    ) {
        let selected = selection(mask);
        let balances = BalanceCalculator.compute(&expenses, selected.iter().copied());

        let unattributed: Money = expenses
            .iter()
            .filter(|e| e.payer.is_none_or(|payer| !selected.contains(&payer)))
            .map(|e| e.amount)
            .sum();
        let sum: Money = balances.values().map(|balance| balance.owes).sum();
        prop_assert!((sum - unattributed).as_decimal().abs() < dec!(0.000000001));
    }
}

proptest! {
    #[test]
    fn transfers_settle_every_balance((selected, expenses) in closed_split()) {
        let calculator = SettlementCalculator::new();
        // Balances within epsilon of zero are never matched, and a cursor also
        // advances once its remainder drops below epsilon. Each skipped amount
        // is up to one epsilon that the counterparties cannot absorb, so one
        // participant can be left holding up to epsilon per selected member.
        let tolerance = calculator.epsilon().as_decimal() * Decimal::from(selected.len());
        let balances = BalanceCalculator.compute(&expenses, selected);
        let transfers = calculator.calculate(&balances);

        for owes in apply_transfers(&balances, &transfers).values() {
            prop_assert!(owes.abs().as_decimal() <= tolerance);
        }
    }
}

proptest! {
    #[test]
    fn transfers_run_from_debtors_to_creditors(
        expenses in expenses_strategy(),
        mask in 1usize..(1 << NAMES.len()),
    ) {
        let calculator = SettlementCalculator::new();
        let balances = BalanceCalculator.compute(&expenses, selection(mask));
        let transfers = calculator.calculate(&balances);

        let creditors = balances.values().filter(|b| b.owes < -calculator.epsilon()).count();
        let debtors = balances.values().filter(|b| b.owes > calculator.epsilon()).count();
        if creditors + debtors > 0 {
            prop_assert!(transfers.len() < creditors + debtors);
        }

        for transfer in &transfers {
            prop_assert!(transfer.amount > calculator.epsilon());
            prop_assert_ne!(&transfer.from, &transfer.to);
            prop_assert!(balances[transfer.from.as_str()].owes > Money::ZERO);
            prop_assert!(balances[transfer.to.as_str()].owes < Money::ZERO);
        }

        // Nobody pays out more than they owe or receives more than they are owed.
        for (name, owes) in apply_transfers(&balances, &transfers) {
            let before = balances[name.as_str()].owes;
            if before.is_positive() {
                prop_assert!(owes >= -calculator.epsilon());
            } else {
                prop_assert!(owes <= calculator.epsilon());
            }
        }
    }
}

proptest! {
    #[test]
    fn settlement_independent_of_input_order(
        cents in prop::collection::hash_set(1i64..100_000, 2..=6),
        debtor_mask in any::<u8>(),
    ) {
        let mut rows: Vec<(String, Decimal)> = cents
            .into_iter()
            .enumerate()
            .map(|(idx, value)| {
                let signed = if debtor_mask & (1 << idx) != 0 { value } else { -value };
                (NAMES[idx].to_owned(), Decimal::new(signed, 2))
            })
            .collect();
        let total: Decimal = rows.iter().map(|(_, owes)| *owes).sum();
        let magnitudes: HashSet<Decimal> = rows.iter().map(|(_, owes)| owes.abs()).collect();
        prop_assume!(!magnitudes.contains(&total.abs()));
        rows.push(("Zed".to_owned(), -total));

        let mut forward: Vec<_> = settle(&rows).iter().map(transfer_key).collect();
        rows.reverse();
        let mut backward: Vec<_> = settle(&rows).iter().map(transfer_key).collect();
        forward.sort();
        backward.sort();

        prop_assert_eq!(forward, backward);
    }
}

fn settle(rows: &[(String, Decimal)]) -> Vec<Transfer> {
    let balances: MemberBalances = rows
        .iter()
        .map(|(name, owes)| {
            (
                name.clone(),
                Balance {
                    owes: Money::from_decimal(*owes),
                    ..Default::default()
                },
            )
        })
        .collect();
    SettlementCalculator::new().calculate(&balances)
}

fn transfer_key(transfer: &Transfer) -> (String, String, Decimal) {
    (
        transfer.from.clone(),
        transfer.to.clone(),
        transfer.amount.as_decimal().normalize(),
    )
}

#[test]
fn scenario_two_payers() {
    let expenses = vec![
        Paid { amount: Money::from_i64(100), payer: Some("Alice") },
        Paid { amount: Money::from_i64(50), payer: Some("Bob") },
    ];

    let balances = BalanceCalculator.compute(&expenses, ["Alice", "Bob"]);
    let transfers = SettlementCalculator::new().calculate(&balances);

    assert_eq!(balances["Alice"].share, Money::from_i64(75));
    assert_eq!(balances["Alice"].owes, Money::from_i64(-25));
    assert_eq!(balances["Bob"].owes, Money::from_i64(25));
    assert_eq!(
        transfers,
        vec![Transfer {
            from: "Bob".to_owned(),
            to: "Alice".to_owned(),
            amount: Money::from_i64(25),
        }]
    );
}

#[test]
fn scenario_one_heavy_payer() {
    let expenses = vec![
        Paid { amount: Money::from_i64(90), payer: Some("Alice") },
        Paid { amount: Money::from_i64(30), payer: Some("Bob") },
        Paid { amount: Money::from_i64(30), payer: Some("Carol") },
    ];

    let balances = BalanceCalculator.compute(&expenses, ["Alice", "Bob", "Carol"]);
    let transfers = SettlementCalculator::new().calculate(&balances);

    let pairs: Vec<(&str, &str, Money)> = transfers
        .iter()
        .map(|t| (t.from.as_str(), t.to.as_str(), t.amount))
        .collect();
    assert_eq!(
        pairs,
        vec![
            ("Bob", "Alice", Money::from_i64(20)),
            ("Carol", "Alice", Money::from_i64(20)),
        ]
    );
}

#[test]
fn scenario_no_expenses() {
    let expenses: Vec<Paid> = Vec::new();

    let balances = BalanceCalculator.compute(&expenses, ["Alice", "Bob"]);

    assert!(balances.values().all(|b| b.owes.is_zero() && b.paid.is_zero()));
    assert!(SettlementCalculator::new().calculate(&balances).is_empty());
}

#[test]
fn sole_payer_split_in_half() {
    let expenses = vec![Paid { amount: Money::new(12_345, 2), payer: Some("Alice") }];

    let balances = BalanceCalculator.compute(&expenses, ["Alice", "Bob"]);
    let transfers = SettlementCalculator::new().calculate(&balances);

    assert_eq!(transfers.len(), 1);
    assert_eq!(transfers[0].from, "Bob");
    assert_eq!(transfers[0].to, "Alice");
    assert_eq!(transfers[0].amount, Money::new(61_725, 3));
}

#[test]
fn sole_participant_owes_nothing() {
    let expenses = vec![Paid { amount: Money::from_i64(80), payer: Some("Alice") }];

    let balances = BalanceCalculator.compute(&expenses, ["Alice"]);

    assert_eq!(balances["Alice"].paid, Money::from_i64(80));
    assert!(balances["Alice"].owes.is_zero());
    assert!(SettlementCalculator::new().calculate(&balances).is_empty());
}
