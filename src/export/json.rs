//! JSON Export functionality
//!
//! Exports the expense log and budgets to JSON format with schema versioning.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::{SpendError, SpendResult};
use crate::models::{Budget, Expense, Money};
use crate::storage::Storage;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full data export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// All expenses, in insertion order
    pub expenses: Vec<Expense>,

    /// The monthly budget, if set
    pub monthly_budget: Option<Budget>,

    /// All category budgets
    pub category_budgets: Vec<Budget>,

    /// Export metadata
    pub metadata: ExportMetadata,
}

/// Export metadata for reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub expense_count: usize,
    pub total_spent: Money,
    pub earliest_expense: Option<NaiveDate>,
    pub latest_expense: Option<NaiveDate>,
}

impl FullExport {
    /// Snapshot the current state of storage
    pub fn from_storage(storage: &Storage) -> Self {
        let expenses = storage.expenses.all().to_vec();

        let metadata = ExportMetadata {
            expense_count: expenses.len(),
            total_spent: expenses.iter().map(|e| e.amount).sum(),
            earliest_expense: expenses.iter().map(|e| e.date).min(),
            latest_expense: expenses.iter().map(|e| e.date).max(),
        };

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            monthly_budget: storage.budgets.monthly_budget().cloned(),
            category_budgets: storage.budgets.category_budgets().to_vec(),
            expenses,
            metadata,
        }
    }
}

/// Export everything to JSON
pub fn export_full_json<W: Write>(
    storage: &Storage,
    writer: &mut W,
    pretty: bool,
) -> SpendResult<()> {
    let export = FullExport::from_storage(storage);

    if pretty {
        serde_json::to_writer_pretty(writer, &export)
    } else {
        serde_json::to_writer(writer, &export)
    }
    .map_err(|e| SpendError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use std::sync::Arc;

    fn create_test_storage() -> Storage {
        let mut storage = Storage::with_store(Arc::new(MemoryStore::new()));
        storage
            .expenses
            .add(Expense::new(
                "Groceries",
                Money::from_cents(4250),
                NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
                "food",
            ))
            .unwrap();
        storage
            .expenses
            .add(Expense::new(
                "Train",
                Money::from_units(12),
                NaiveDate::from_ymd_opt(2024, 2, 20).unwrap(),
                "transport",
            ))
            .unwrap();
        storage.budgets.set_monthly_budget(Money::from_units(500)).unwrap();
        storage
            .budgets
            .set_category_budget("food", Money::from_units(200))
            .unwrap();
        storage
    }

    #[test]
    fn test_full_export() {
        let storage = create_test_storage();
        let export = FullExport::from_storage(&storage);

        assert_eq!(export.schema_version, EXPORT_SCHEMA_VERSION);
        assert_eq!(export.expenses.len(), 2);
        assert!(export.monthly_budget.is_some());
        assert_eq!(export.category_budgets.len(), 1);
        assert_eq!(export.metadata.total_spent, Money::from_cents(5450));
        assert_eq!(
            export.metadata.earliest_expense,
            NaiveDate::from_ymd_opt(2024, 2, 20)
        );
    }

    #[test]
    fn test_json_output_reads_back() {
        let storage = create_test_storage();

        let mut json_output = Vec::new();
        export_full_json(&storage, &mut json_output, true).unwrap();

        let imported: FullExport = serde_json::from_slice(&json_output).unwrap();
        assert_eq!(imported.expenses, storage.expenses.all());
        assert_eq!(imported.monthly_budget.as_ref(), storage.budgets.monthly_budget());
    }
}
