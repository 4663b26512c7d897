//! Property-based tests for settlement invariants.

use engine::{EPSILON, Ledger, Money, SettlementResult, Standing, positions, settle};
use proptest::prelude::*;

const NAMES: [&str; 6] = ["Alice", "Bob", "Carol", "Dave", "Erin", "Frank"];

fn arb_ledger() -> impl Strategy<Value = Ledger> {
    prop::collection::vec((0..NAMES.len(), 0i64..1_000_000), 0..20).prop_map(|records| {
        let mut ledger = Ledger::new();
        for (name, minor) in records {
            ledger
                .add(NAMES[name], Money::from_minor(minor), None)
                .unwrap();
        }
        ledger
    })
}

proptest! {
    /// Property: received - sent matches each participant's net position
    #[test]
    fn balance_conservation(ledger in arb_ledger()) {
        let result = settle(&ledger);
        let Some(positions) = positions(&ledger) else {
            prop_assert!(result.transfers().is_empty());
            return Ok(());
        };

        for position in &positions.entries {
            let involved = result
                .transfers()
                .iter()
                .any(|t| t.from == position.name || t.to == position.name);
            if !involved {
                continue;
            }
            let received: Money = result
                .transfers()
                .iter()
                .filter(|t| t.to == position.name)
                .map(|t| t.amount)
                .sum();
            let sent: Money = result
                .transfers()
                .iter()
                .filter(|t| t.from == position.name)
                .map(|t| t.amount)
                .sum();
            let drift = (received - sent - position.net).abs();
            prop_assert!(drift <= Money::from_minor(2), "{} drifted by {drift}", position.name);
        }
    }

    /// Property: money moved equals what debtors owe and creditors are owed
    #[test]
    fn total_transfer_mass(ledger in arb_ledger()) {
        let result = settle(&ledger);
        prop_assume!(!result.transfers().is_empty());
        let positions = positions(&ledger).unwrap();

        let moved: Money = result.transfers().iter().map(|t| t.amount).sum();
        let owed: Money = positions
            .entries
            .iter()
            .filter(|p| p.standing() == Standing::Debtor)
            .map(|p| p.net.abs())
            .sum();
        let due: Money = positions
            .entries
            .iter()
            .filter(|p| p.standing() == Standing::Creditor)
            .map(|p| p.net)
            .sum();

        let tolerance = Money::from_minor(result.transfers().len() as i64);
        prop_assert!((moved - owed).abs() <= tolerance);
        prop_assert!((moved - due).abs() <= tolerance);
    }

    /// Property: settling twice yields the same plan
    #[test]
    fn settle_is_idempotent(ledger in arb_ledger()) {
        prop_assert_eq!(settle(&ledger), settle(&ledger));
    }

    /// Property: transfers <= debtors + creditors - 1, each at least one cent
    #[test]
    fn transfer_count_is_bounded(ledger in arb_ledger()) {
        let result = settle(&ledger);
        let SettlementResult::Plan { transfers, .. } = result else {
            return Ok(());
        };
        let positions = positions(&ledger).unwrap();
        let active = positions
            .entries
            .iter()
            .filter(|p| p.standing() != Standing::Settled)
            .count();

        prop_assert!(transfers.len() < active.max(1));
        for transfer in &transfers {
            prop_assert!(transfer.amount >= EPSILON);
            prop_assert_ne!(&transfer.from, &transfer.to);
        }
    }

    /// Property: equal payments never need transfers
    #[test]
    fn equal_payments_are_settled(count in 1usize..6, minor in 0i64..1_000_000) {
        let mut ledger = Ledger::new();
        for name in &NAMES[..count] {
            ledger.add(name, Money::from_minor(minor), None).unwrap();
        }
        prop_assert_eq!(
            settle(&ledger),
            SettlementResult::NoTransactionsNeeded {
                equal_share: Money::from_minor(minor),
            }
        );
    }
}
