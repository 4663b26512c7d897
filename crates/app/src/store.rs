//! Persistence of the expense list.

use std::{
    fs,
    path::{Path, PathBuf},
};

use engine::Expense;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Loads and saves the ordered expense list.
///
/// `load` must return the records in the order they were saved.
pub trait ExpenseStore {
    fn load(&self) -> Result<Vec<Expense>>;
    fn save(&mut self, expenses: &[Expense]) -> Result<()>;
}

/// On-disk document written by [`JsonStore`].
#[derive(Debug, Default, Serialize, Deserialize)]
struct StateFile {
    expenses: Vec<Expense>,
}

/// Stores expenses as a pretty-printed JSON document, amounts as decimal strings.
///
/// A missing file reads as an empty list; parent directories are created on
/// the first save.
#[derive(Debug, Clone)]
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ExpenseStore for JsonStore {
    fn load(&self) -> Result<Vec<Expense>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Vec::new());
            }
            Err(err) => return Err(err.into()),
        };
        let state: StateFile = serde_json::from_str(&content)?;
        Ok(state.expenses)
    }

    fn save(&mut self, expenses: &[Expense]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let state = StateFile {
            expenses: expenses.to_vec(),
        };
        let payload = serde_json::to_string_pretty(&state)?;
        fs::write(&self.path, payload)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use engine::Money;

    use super::*;

    #[test]
    fn missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path().join("absent.json"));
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn round_trips_order_and_notes() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonStore::new(dir.path().join("nested/state.json"));

        let expenses = vec![
            Expense::new("Alice", Money::from_minor(3000), Some("dinner")).unwrap(),
            Expense::new("Bob", Money::from_minor(1001), None).unwrap(),
            Expense::new("Alice", Money::from_minor(3000), Some("dinner")).unwrap(),
        ];
        store.save(&expenses).unwrap();

        assert_eq!(store.load().unwrap(), expenses);
    }

    #[test]
    fn rejects_invalid_records_on_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        fs::write(&path, r#"{"expenses":[{"payer":" ","amount":"1.00"}]}"#).unwrap();

        let store = JsonStore::new(&path);
        assert!(store.load().is_err());
    }
}
