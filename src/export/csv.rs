//! CSV Export functionality
//!
//! Exports expenses to spreadsheet-compatible CSV.

use std::io::Write;

use crate::error::{SpendError, SpendResult};
use crate::models::{CategoryRegistry, Expense};

/// Export expenses to CSV, one row per expense
pub fn export_expenses_csv<'a, W: Write>(
    expenses: impl IntoIterator<Item = &'a Expense>,
    registry: &CategoryRegistry,
    writer: W,
) -> SpendResult<()> {
    let mut csv = ::csv::Writer::from_writer(writer);
    let err = |e: ::csv::Error| SpendError::Export(e.to_string());

    csv.write_record(["ID", "Date", "Description", "Category", "Category Name", "Amount"])
        .map_err(err)?;

    for expense in expenses {
        let date = expense.date.to_string();
        let amount = format!("{:.2}", expense.amount.to_decimal());
        csv.write_record([
            expense.id.as_str(),
            date.as_str(),
            expense.description.as_str(),
            expense.category.as_str(),
            registry.display_name(&expense.category),
            amount.as_str(),
        ])
        .map_err(err)?;
    }

    csv.flush().map_err(|e| SpendError::Export(e.to_string()))?;
    Ok(())
}
