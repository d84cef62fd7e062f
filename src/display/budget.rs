//! Budget display formatting

use crate::models::CategoryRegistry;
use crate::services::budget::{BudgetOverview, CategoryBudgetStatus};

use super::report::{format_bar, format_remaining, separator};

const PROGRESS_WIDTH: usize = 20;

/// Progress bar with percentage, e.g. "████░░░░ 60%"
pub fn format_progress(progress: f64) -> String {
    format!(
        "{} {:>3.0}%",
        format_bar(progress, 1.0, PROGRESS_WIDTH),
        progress * 100.0
    )
}

/// Monthly budget summary
pub fn format_monthly_summary(overview: &BudgetOverview, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Budget for {}\n", overview.month.label()));
    output.push_str(&separator(50));
    output.push('\n');

    if overview.has_monthly_budget() {
        output.push_str(&format!(
            "Budget:    {}\n",
            overview.monthly_budget.format_with_symbol(symbol)
        ));
    } else {
        output.push_str("Budget:    (not set)\n");
    }
    output.push_str(&format!(
        "Spent:     {}\n",
        overview.spent.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Remaining: {}\n",
        format_remaining(overview.remaining, symbol)
    ));
    output.push_str(&format!("Progress:  {}\n", format_progress(overview.progress)));

    if overview.is_overspent() && overview.has_monthly_budget() {
        output.push_str("\n⚠ Over budget this month\n");
    }

    output
}

fn format_category_row(
    status: &CategoryBudgetStatus,
    registry: &CategoryRegistry,
    symbol: &str,
) -> String {
    let category = registry.resolve(&status.category);
    let budget = if status.has_budget() {
        status.budgeted.format_with_symbol(symbol)
    } else {
        "-".to_string()
    };

    format!(
        "{} {:<14} {:>10} {:>10}  {:<14} {}\n",
        category.icon,
        registry.display_name(&status.category),
        budget,
        status.spent.format_with_symbol(symbol),
        format_remaining(status.remaining, symbol),
        format_progress(status.progress)
    )
}

/// Per-category budget table
pub fn format_category_budgets(
    overview: &BudgetOverview,
    registry: &CategoryRegistry,
    symbol: &str,
) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "  {:<14} {:>10} {:>10}  {:<14} {}\n",
        "Category", "Budget", "Spent", "Remaining", "Progress"
    ));
    output.push_str(&separator(80));
    output.push('\n');

    for status in &overview.categories {
        output.push_str(&format_category_row(status, registry, symbol));
    }

    let overspent: Vec<_> = overview
        .overspent_categories()
        .map(|s| registry.display_name(&s.category).to_string())
        .collect();
    if !overspent.is_empty() {
        output.push_str(&format!("\n⚠ Over budget: {}\n", overspent.join(", ")));
    }

    output
}
