//! YAML Export functionality
//!
//! Exports the same snapshot as the JSON exporter in a human-readable form.

use std::io::Write;

use crate::error::{SpendError, SpendResult};
use crate::export::json::FullExport;
use crate::storage::Storage;

/// Export everything to YAML format
pub fn export_full_yaml<W: Write>(storage: &Storage, writer: &mut W) -> SpendResult<()> {
    let export = FullExport::from_storage(storage);
    let err = |e: std::io::Error| SpendError::Export(e.to_string());

    writeln!(writer, "# spendlog export").map_err(err)?;
    writeln!(writer, "# Generated: {}", export.exported_at).map_err(err)?;
    writeln!(writer, "# App Version: {}", export.app_version).map_err(err)?;
    writeln!(writer).map_err(err)?;

    serde_yaml::to_writer(writer, &export).map_err(|e| SpendError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Expense, Money};
    use crate::storage::MemoryStore;
    use chrono::NaiveDate;
    use std::sync::Arc;

    #[test]
    fn test_yaml_export() {
        let mut storage = Storage::with_store(Arc::new(MemoryStore::new()));
        storage
            .expenses
            .add(Expense::new(
                "Cinema",
                Money::from_units(15),
                NaiveDate::from_ymd_opt(2024, 3, 9).unwrap(),
                "entertainment",
            ))
            .unwrap();

        let mut output = Vec::new();
        export_full_yaml(&storage, &mut output).unwrap();
        let yaml = String::from_utf8(output).unwrap();

        assert!(yaml.starts_with("# spendlog export"));
        assert!(yaml.contains("schema_version:"));
        assert!(yaml.contains("description: Cinema"));
        assert!(yaml.contains("monthly_budget: null"));

        let imported: FullExport = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(imported.expenses.len(), 1);
    }
}
