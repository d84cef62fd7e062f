//! Spending Report
//!
//! Per-category totals over a selection of expenses, and the top-N breakdown
//! used by the history histogram.

use std::collections::HashMap;
use std::io::Write;

use crate::error::{SpendError, SpendResult};
use crate::models::{CategoryRegistry, Expense, Money};

/// Total spending for one category key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTotal {
    /// Category key, possibly unknown to the registry
    pub category: String,
    pub amount: Money,
    /// Number of expenses contributing
    pub count: usize,
}

/// Sum amounts per category key
///
/// Categories appear in the order they are first encountered. Unknown keys
/// are aggregated like any other.
pub fn aggregate_by_category<'a>(
    expenses: impl IntoIterator<Item = &'a Expense>,
) -> Vec<CategoryTotal> {
    let mut index: HashMap<&'a str, usize> = HashMap::new();
    let mut totals: Vec<CategoryTotal> = Vec::new();

    for expense in expenses {
        let slot = *index.entry(expense.category.as_str()).or_insert_with(|| {
            totals.push(CategoryTotal {
                category: expense.category.clone(),
                amount: Money::zero(),
                count: 0,
            });
            totals.len() - 1
        });
        totals[slot].amount += expense.amount;
        totals[slot].count += 1;
    }

    totals
}

/// The `limit` largest totals, largest first
///
/// Ties keep first-encountered order.
pub fn top_categories(mut totals: Vec<CategoryTotal>, limit: usize) -> Vec<CategoryTotal> {
    totals.sort_by(|a, b| b.amount.cmp(&a.amount));
    totals.truncate(limit);
    totals
}

/// Spending breakdown by category
#[derive(Debug, Clone)]
pub struct SpendingByCategory {
    pub category: String,
    /// Registry name, or the raw key when unknown
    pub category_name: String,
    pub total_spending: Money,
    pub expense_count: usize,
    /// Share of the report total, in percent
    pub percentage: f64,
}

/// Spending Report over a selection of expenses
#[derive(Debug, Clone)]
pub struct SpendingReport {
    /// Heading, e.g. "March 2024" or "All time"
    pub title: String,
    /// Categories, most spending first
    pub categories: Vec<SpendingByCategory>,
    pub total_spending: Money,
    pub total_expenses: usize,
}

impl SpendingReport {
    /// Generate a report for the given expenses
    pub fn generate<'a>(
        title: impl Into<String>,
        expenses: impl IntoIterator<Item = &'a Expense>,
        registry: &CategoryRegistry,
    ) -> Self {
        let totals = aggregate_by_category(expenses);
        let total_spending: Money = totals.iter().map(|t| t.amount).sum();
        let total_expenses = totals.iter().map(|t| t.count).sum();

        let categories = top_categories(totals, usize::MAX)
            .into_iter()
            .map(|t| SpendingByCategory {
                category_name: registry.display_name(&t.category).to_string(),
                percentage: t
                    .amount
                    .ratio(total_spending)
                    .map(|r| r * 100.0)
                    .unwrap_or(0.0),
                category: t.category,
                total_spending: t.amount,
                expense_count: t.count,
            })
            .collect();

        Self {
            title: title.into(),
            categories,
            total_spending,
            total_expenses,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.total_expenses == 0
    }

    /// Export the report as CSV
    pub fn export_csv<W: Write>(&self, writer: W) -> SpendResult<()> {
        let mut csv = csv::Writer::from_writer(writer);
        let err = |e: csv::Error| SpendError::Export(e.to_string());

        csv.write_record(["Category", "Name", "Amount", "Count", "Percentage"])
            .map_err(err)?;
        for category in &self.categories {
            csv.write_record([
                category.category.clone(),
                category.category_name.clone(),
                format!("{:.2}", category.total_spending.to_decimal()),
                category.expense_count.to_string(),
                format!("{:.2}", category.percentage),
            ])
            .map_err(err)?;
        }
        csv.flush()
            .map_err(|e| SpendError::Export(e.to_string()))?;

        Ok(())
    }
}
