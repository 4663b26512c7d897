//! The ledger owner.
//!
//! A [`Book`] holds the only [`Ledger`] of the process together with the store
//! it came from, and writes the full expense list back after every mutation.

use engine::{Expense, Ledger, Money, SettlementResult, settle};

use crate::{error::Result, store::ExpenseStore};

#[derive(Debug)]
pub struct Book<S: ExpenseStore> {
    ledger: Ledger,
    store: S,
}

impl<S: ExpenseStore> Book<S> {
    /// Loads the persisted expenses into a fresh ledger.
    pub fn open(store: S) -> Result<Self> {
        let ledger = Ledger::from_expenses(store.load()?)?;
        tracing::debug!("loaded {} expenses", ledger.len());
        Ok(Self { ledger, store })
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn add(&mut self, payer: &str, amount: Money, note: Option<&str>) -> Result<()> {
        self.ledger.add(payer, amount, note)?;
        tracing::debug!("added expense #{}", self.ledger.len() - 1);
        self.persist()
    }

    pub fn remove(&mut self, index: usize) -> Result<Expense> {
        let removed = self.ledger.remove(index)?;
        tracing::debug!("removed expense #{index}");
        self.persist()?;
        Ok(removed)
    }

    /// Drops every expense and returns how many there were.
    pub fn clear(&mut self) -> Result<usize> {
        let count = self.ledger.len();
        self.ledger.clear();
        tracing::debug!("cleared {count} expenses");
        self.persist()?;
        Ok(count)
    }

    /// Appends already validated expenses, saving once at the end.
    pub fn extend(&mut self, expenses: Vec<Expense>) -> Result<usize> {
        let mut staged = self.ledger.clone();
        let count = expenses.len();
        for expense in expenses {
            staged.push(expense)?;
        }
        self.ledger = staged;
        tracing::debug!("appended {count} expenses");
        self.persist()?;
        Ok(count)
    }

    pub fn settle(&self) -> SettlementResult {
        settle(&self.ledger)
    }

    fn persist(&mut self) -> Result<()> {
        self.store.save(self.ledger.expenses())?;
        tracing::info!("saved {} expenses", self.ledger.len());
        Ok(())
    }
}
