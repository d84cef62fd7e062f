//! Expense display formatting
//!
//! Expense tables and detail views. Unknown category keys are shown with the
//! fallback icon and the raw key as their name.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::{CategoryRegistry, Expense, Money};

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "")]
    icon: &'static str,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Category label for an expense, e.g. "🍔 Food" or "❓ crypto"
pub fn category_label(registry: &CategoryRegistry, key: &str) -> String {
    let category = registry.resolve(key);
    format!("{} {}", category.icon, registry.display_name(key))
}

/// Format one expense as a single line
pub fn format_expense_row(
    expense: &Expense,
    registry: &CategoryRegistry,
    symbol: &str,
    date_format: &str,
) -> String {
    format!(
        "{} {:<18} {:<30} {:>12}",
        expense.date.format(date_format),
        category_label(registry, &expense.category),
        expense.description,
        expense.amount.format_with_symbol(symbol)
    )
}

/// Format expenses as a table followed by their total
pub fn format_expense_table<'a>(
    expenses: impl IntoIterator<Item = &'a Expense>,
    registry: &CategoryRegistry,
    symbol: &str,
    date_format: &str,
) -> String {
    let mut total = Money::zero();
    let rows: Vec<ExpenseRow> = expenses
        .into_iter()
        .map(|e| {
            total += e.amount;
            ExpenseRow {
                id: e.id.to_string(),
                date: e.date.format(date_format).to_string(),
                icon: registry.resolve(&e.category).icon,
                category: registry.display_name(&e.category).to_string(),
                description: e.description.clone(),
                amount: e.amount.format_with_symbol(symbol),
            }
        })
        .collect();

    if rows.is_empty() {
        return "No expenses found.\n".to_string();
    }

    let count = rows.len();
    let mut table = Table::new(rows);
    table.with(Style::psql());

    format!(
        "{}\n\n{} expense{}, total {}\n",
        table,
        count,
        if count == 1 { "" } else { "s" },
        total.format_with_symbol(symbol)
    )
}

/// Format expense details for display
pub fn format_expense_details(
    expense: &Expense,
    registry: &CategoryRegistry,
    symbol: &str,
) -> String {
    let mut output = String::new();

    output.push_str(&format!("Expense:     {}\n", expense.id));
    output.push_str(&format!("Description: {}\n", expense.description));
    output.push_str(&format!("Date:        {}\n", expense.date.format("%Y-%m-%d")));
    output.push_str(&format!(
        "Category:    {}\n",
        category_label(registry, &expense.category)
    ));
    output.push_str(&format!(
        "Amount:      {}\n",
        expense.amount.format_with_symbol(symbol)
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExpenseId;
    use chrono::NaiveDate;

    fn expense(category: &str) -> Expense {
        Expense::with_id(
            ExpenseId::new("1709251200000"),
            "Lunch",
            Money::from_cents(1250),
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            category,
        )
    }

    #[test]
    fn test_category_label_with_fallback() {
        let registry = CategoryRegistry::standard();
        assert_eq!(category_label(&registry, "food"), "🍔 Food");
        assert_eq!(category_label(&registry, "crypto"), "❓ crypto");
    }

    #[test]
    fn test_format_expense_row() {
        let registry = CategoryRegistry::standard();
        let row = format_expense_row(&expense("food"), &registry, "$", "%Y-%m-%d");
        assert!(row.starts_with("2024-03-01"));
        assert!(row.contains("Lunch"));
        assert!(row.ends_with("$12.50"));
    }

    #[test]
    fn test_format_expense_table() {
        let expenses = vec![expense("food"), expense("crypto")];
        let registry = CategoryRegistry::standard();
        let output = format_expense_table(&expenses, &registry, "€", "%Y-%m-%d");

        assert!(output.contains("Description"));
        assert!(output.contains("Food"));
        assert!(output.contains("crypto"));
        assert!(output.contains("2 expenses, total €25.00"));
    }

    #[test]
    fn test_format_empty_table() {
        let output = format_expense_table(&[], &CategoryRegistry::standard(), "$", "%Y-%m-%d");
        assert_eq!(output, "No expenses found.\n");
    }

    #[test]
    fn test_format_expense_details() {
        let output = format_expense_details(&expense("food"), &CategoryRegistry::standard(), "$");
        assert!(output.contains("Expense:     1709251200000"));
        assert!(output.contains("Amount:      $12.50"));
    }
}
