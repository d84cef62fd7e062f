//! Category display formatting
//!
//! Formats the category registry for terminal output.

use crate::models::{Budget, CategoryRegistry};

/// Format the registry as a table, with each category's budget if one is set
pub fn format_category_list(
    registry: &CategoryRegistry,
    budgets: &[Budget],
    symbol: &str,
) -> String {
    let categories = registry.all();
    if categories.is_empty() {
        return "No categories found.".to_string();
    }

    let name_width = categories
        .iter()
        .map(|c| c.name.len())
        .max()
        .unwrap_or(4)
        .max(4);
    let key_width = categories
        .iter()
        .map(|c| c.key.len())
        .max()
        .unwrap_or(3)
        .max(3);

    let mut output = String::new();
    output.push_str(&format!(
        "   {:<name_width$}  {:<key_width$}  {:>10}\n",
        "Category",
        "Key",
        "Budget",
        name_width = name_width,
        key_width = key_width,
    ));
    output.push_str(&format!(
        "   {:-<name_width$}  {:-<key_width$}  {:->10}\n",
        "",
        "",
        "",
        name_width = name_width,
        key_width = key_width,
    ));

    for category in categories {
        let budget = budgets
            .iter()
            .find(|b| b.is_for(category.key))
            .map(|b| b.amount.format_with_symbol(symbol))
            .unwrap_or_else(|| "-".to_string());

        output.push_str(&format!(
            "{} {:<name_width$}  {:<key_width$}  {:>10}\n",
            category.icon,
            category.name,
            category.key,
            budget,
            name_width = name_width,
            key_width = key_width,
        ));
    }

    output
}
