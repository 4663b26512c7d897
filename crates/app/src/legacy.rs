//! Import of the expense list exported by the SplitSafe web app.
//!
//! The web app keeps a JSON array of `{ "name", "amount", "desc" }` objects
//! with float amounts. Records the ledger would reject (blank names, negative
//! or missing amounts) are skipped.

use std::{fs, path::Path};

use engine::{Expense, Money};
use serde::Deserialize;

use crate::error::Result;

#[derive(Debug, Deserialize)]
struct LegacyExpense {
    #[serde(default)]
    name: String,
    #[serde(default)]
    amount: Option<f64>,
    #[serde(default)]
    desc: Option<String>,
}

#[derive(Debug, Default)]
pub struct Imported {
    pub expenses: Vec<Expense>,
    pub skipped: usize,
}

pub fn read(path: &Path) -> Result<Imported> {
    let content = fs::read_to_string(path)?;
    parse(&content)
}

pub fn parse(content: &str) -> Result<Imported> {
    let records: Vec<LegacyExpense> = serde_json::from_str(content)?;
    let mut imported = Imported::default();

    for (position, record) in records.into_iter().enumerate() {
        let converted = record
            .amount
            .ok_or_else(|| engine::EngineError::InvalidInput("missing amount".to_string()))
            .and_then(Money::try_from_f64)
            .and_then(|amount| Expense::new(&record.name, amount, record.desc.as_deref()));

        match converted {
            Ok(expense) => imported.expenses.push(expense),
            Err(err) => {
                tracing::warn!("skipping legacy record #{position}: {err}");
                imported.skipped += 1;
            }
        }
    }

    Ok(imported)
}
