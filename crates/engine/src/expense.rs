//! Expense records.
//!
//! An [`Expense`] is a single "`payer` paid `amount`" entry of a
//! [`Ledger`](crate::Ledger). Records are immutable once created and have no
//! identity of their own: the ledger addresses them by position.

use serde::{Deserialize, Serialize};

use crate::{EngineError, Money};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ExpenseRecord")]
pub struct Expense {
    payer: String,
    amount: Money,
    #[serde(skip_serializing_if = "Option::is_none")]
    note: Option<String>,
}

/// Wire shape of an [`Expense`], validated on the way in.
#[derive(Deserialize)]
struct ExpenseRecord {
    payer: String,
    amount: Money,
    #[serde(default)]
    note: Option<String>,
}

impl TryFrom<ExpenseRecord> for Expense {
    type Error = EngineError;

    fn try_from(record: ExpenseRecord) -> Result<Self, Self::Error> {
        Expense::new(&record.payer, record.amount, record.note.as_deref())
    }
}

impl Expense {
    /// Builds a validated expense.
    ///
    /// - `payer` is trimmed and must not be empty.
    /// - `amount` must be zero or positive.
    /// - a blank `note` is stored as no note.
    pub fn new(payer: &str, amount: Money, note: Option<&str>) -> Result<Self, EngineError> {
        let payer = payer.trim();
        if payer.is_empty() {
            return Err(EngineError::InvalidInput(
                "payer name cannot be empty".to_string(),
            ));
        }
        if amount.is_negative() {
            return Err(EngineError::InvalidInput(format!(
                "amount must be >= 0, got {amount}"
            )));
        }
        let note = note
            .filter(|note| !note.trim().is_empty())
            .map(str::to_string);

        Ok(Self {
            payer: payer.to_string(),
            amount,
            note,
        })
    }

    #[must_use]
    pub fn payer(&self) -> &str {
        &self.payer
    }

    #[must_use]
    pub fn amount(&self) -> Money {
        self.amount
    }

    #[must_use]
    pub fn note(&self) -> Option<&str> {
        self.note.as_deref()
    }
}
