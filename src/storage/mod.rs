//! Storage layer for spendlog
//!
//! Provides the key-value persistence port, its JSON-file and in-memory
//! implementations, and the two stateful owners built on top of it: the
//! expense repository and the budget ledger.

pub mod budgets;
pub mod expenses;
pub mod file_io;
pub mod listeners;
pub mod store;

pub use budgets::{BudgetLedger, BudgetSet};
pub use expenses::ExpenseRepository;
pub use listeners::{ListenerId, Listeners};
pub use store::{
    load_json, load_records, save_json, save_records, JsonFileStore, KeyValueStore, MemoryStore,
    SharedStore, StoredRecords, CATEGORY_BUDGETS_KEY, EXPENSES_KEY, MONTHLY_BUDGET_KEY,
};

use std::sync::Arc;

use crate::config::paths::SpendPaths;
use crate::error::SpendError;

/// Storage coordinator giving access to the expense repository and the
/// budget ledger
#[derive(Debug)]
pub struct Storage {
    pub expenses: ExpenseRepository,
    pub budgets: BudgetLedger,
}

impl Storage {
    /// Open the JSON file store under the data directory
    pub fn open(paths: &SpendPaths) -> Result<Self, SpendError> {
        paths.ensure_directories()?;
        let store: SharedStore = Arc::new(JsonFileStore::new(paths.data_dir()));
        Ok(Self::with_store(store))
    }

    /// Load both owners from an arbitrary store
    pub fn with_store(store: SharedStore) -> Self {
        Self {
            expenses: ExpenseRepository::load(Arc::clone(&store)),
            budgets: BudgetLedger::load(store),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Expense, Money};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    #[test]
    fn test_open_creates_data_directory() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SpendPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::open(&paths).unwrap();

        assert!(temp_dir.path().join("data").exists());
        assert!(storage.expenses.is_empty());
    }

    #[test]
    fn test_state_persists_across_opens() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SpendPaths::with_base_dir(temp_dir.path().to_path_buf());

        {
            let mut storage = Storage::open(&paths).unwrap();
            storage
                .expenses
                .add(Expense::new(
                    "Bus ticket",
                    Money::from_cents(275),
                    NaiveDate::from_ymd_opt(2024, 3, 2).unwrap(),
                    "transport",
                ))
                .unwrap();
            storage.budgets.set_monthly_budget(Money::from_units(100)).unwrap();
        }

        let storage = Storage::open(&paths).unwrap();
        assert_eq!(storage.expenses.count(), 1);
        assert_eq!(storage.expenses.all()[0].description, "Bus ticket");
        assert_eq!(
            storage.budgets.monthly_budget().map(|b| b.amount),
            Some(Money::from_units(100))
        );
        assert!(paths.data_dir().join("expenses.json").exists());
        assert!(paths.data_dir().join("monthlyBudget.json").exists());
    }
}
