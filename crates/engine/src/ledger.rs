//! Ordered list of expenses.

use std::collections::HashSet;

use crate::{EngineError, Expense, Money, ResultEngine};

/// Ordered sequence of [`Expense`] records, in insertion order.
///
/// The ledger only stores records; balances and transfers are derived from a
/// snapshot by [`settle`](crate::settle). Every mutating operation validates its
/// input first, so a failed call leaves the ledger untouched.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Ledger {
    expenses: Vec<Expense>,
}

impl Ledger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a ledger from previously persisted records, keeping their order.
    pub fn from_expenses(expenses: Vec<Expense>) -> ResultEngine<Self> {
        let mut ledger = Self::new();
        for expense in expenses {
            ledger.push(expense)?;
        }
        Ok(ledger)
    }

    /// Appends a new expense.
    ///
    /// Fails with [`EngineError::InvalidInput`] when `payer` is blank or `amount`
    /// is negative.
    pub fn add(&mut self, payer: &str, amount: Money, note: Option<&str>) -> ResultEngine<()> {
        let expense = Expense::new(payer, amount, note)?;
        self.push(expense)
    }

    /// Appends an already validated expense.
    pub fn push(&mut self, expense: Expense) -> ResultEngine<()> {
        if self.total_amount().checked_add(expense.amount()).is_none() {
            return Err(EngineError::InvalidInput("ledger total too large".to_string()));
        }
        self.expenses.push(expense);
        Ok(())
    }

    /// Removes the expense at `index`; later records shift down by one.
    pub fn remove(&mut self, index: usize) -> ResultEngine<Expense> {
        if index >= self.expenses.len() {
            return Err(EngineError::IndexOutOfRange {
                index,
                len: self.expenses.len(),
            });
        }
        Ok(self.expenses.remove(index))
    }

    pub fn clear(&mut self) {
        self.expenses.clear();
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Expense> {
        self.expenses.get(index)
    }

    #[must_use]
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Expense> {
        self.expenses.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    /// Sum of every amount, `0` for an empty ledger.
    #[must_use]
    pub fn total_amount(&self) -> Money {
        self.expenses.iter().map(Expense::amount).sum()
    }

    /// Distinct trimmed payer names in order of first appearance.
    ///
    /// Names are compared exactly: `"alice"` and `"Alice"` are two participants.
    #[must_use]
    pub fn distinct_participants(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.expenses
            .iter()
            .map(|expense| expense.payer().trim())
            .filter(|name| seen.insert(*name))
            .collect()
    }

    /// Participant count shown to users: trimmed names compared
    /// case-insensitively.
    ///
    /// Only meant for display. Settlement identity stays case-sensitive, see
    /// [`Ledger::distinct_participants`].
    #[must_use]
    pub fn display_participant_count(&self) -> usize {
        self.expenses
            .iter()
            .map(|expense| expense.payer().trim().to_lowercase())
            .collect::<HashSet<_>>()
            .len()
    }
}

impl<'a> IntoIterator for &'a Ledger {
    type Item = &'a Expense;
    type IntoIter = std::slice::Iter<'a, Expense>;

    fn into_iter(self) -> Self::IntoIter {
        self.expenses.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ledger(records: &[(&str, i64)]) -> Ledger {
        let mut ledger = Ledger::new();
        for (payer, minor) in records {
            ledger.add(payer, Money::from_minor(*minor), None).unwrap();
        }
        ledger
    }

    #[test]
    fn add_appends_in_order() {
        let ledger = ledger(&[("Alice", 3000), ("Bob", 1000), ("Alice", 500)]);
        let payers: Vec<_> = ledger.iter().map(Expense::payer).collect();
        assert_eq!(payers, ["Alice", "Bob", "Alice"]);
        assert_eq!(ledger.total_amount(), Money::from_minor(4500));
    }

    #[test]
    fn add_rejects_invalid_input_without_mutating() {
        let mut ledger = ledger(&[("Alice", 100)]);
        let err = ledger.add("   ", Money::from_minor(100), None).unwrap_err();
        assert!(matches!(err, EngineError::InvalidInput(_)));
        let err = ledger.add("Bob", Money::from_minor(-100), None).unwrap_err();
        assert!(matches!(err, EngineError::InvalidInput(_)));
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn remove_shifts_later_records() {
        let mut ledger = ledger(&[("A", 100), ("B", 200), ("C", 300)]);

        let removed = ledger.remove(0).unwrap();
        assert_eq!(removed.payer(), "A");
        assert_eq!(ledger.get(0).map(Expense::payer), Some("B"));
        assert_eq!(ledger.get(1).map(Expense::payer), Some("C"));

        let removed = ledger.remove(1).unwrap();
        assert_eq!(removed.payer(), "C");
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn remove_out_of_range() {
        let mut ledger = ledger(&[("A", 100)]);
        assert_eq!(
            ledger.remove(1),
            Err(EngineError::IndexOutOfRange { index: 1, len: 1 })
        );
        assert_eq!(ledger.len(), 1);
        assert!(Ledger::new().remove(0).is_err());
    }

    #[test]
    fn duplicates_are_distinguished_by_position() {
        let mut ledger = ledger(&[("Alice", 100), ("Alice", 100)]);
        ledger.remove(1).unwrap();
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn clear_empties() {
        let mut ledger = ledger(&[("A", 100), ("B", 200)]);
        ledger.clear();
        assert!(ledger.is_empty());
        assert_eq!(ledger.total_amount(), Money::ZERO);
    }

    #[test]
    fn participant_identity_vs_display_count() {
        let ledger = ledger(&[("Alice", 100), (" alice", 100), ("ALICE ", 100), ("Bob", 0)]);
        assert_eq!(ledger.distinct_participants(), ["Alice", "alice", "ALICE", "Bob"]);
        assert_eq!(ledger.display_participant_count(), 2);
    }
}
