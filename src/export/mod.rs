//! Export module for spendlog
//!
//! - CSV: expenses only (spreadsheet-compatible)
//! - JSON: expenses and budgets, machine-readable
//! - YAML: the same snapshot, human-readable

pub mod csv;
pub mod json;
pub mod yaml;

pub use csv::export_expenses_csv;
pub use json::{export_full_json, ExportMetadata, FullExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_full_yaml;
