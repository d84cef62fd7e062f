//! Report formatting utilities for terminal output
//!
//! Bars, the top-categories histogram and the month list.

use crate::models::{CategoryRegistry, Money};
use crate::reports::spending::{CategoryTotal, SpendingReport};
use crate::services::period::MonthSummary;

/// Width of histogram bars, in cells
pub const BAR_WIDTH: usize = 24;

/// Format a percentage with appropriate precision
pub fn format_percentage(pct: f64) -> String {
    if pct < 0.1 && pct > 0.0 {
        format!("{:.2}%", pct)
    } else if pct < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return "░".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Truncate a string to a maximum number of characters with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        ".".repeat(max_len)
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    }
}

/// Histogram of category totals, bars scaled to the largest
pub fn format_histogram(
    top: &[CategoryTotal],
    registry: &CategoryRegistry,
    symbol: &str,
) -> String {
    let Some(max) = top.iter().map(|t| t.amount).max() else {
        return String::new();
    };

    let mut output = String::new();
    for total in top {
        let category = registry.resolve(&total.category);
        output.push_str(&format!(
            "{} {:<14} {} {:>12}\n",
            category.icon,
            truncate(registry.display_name(&total.category), 14),
            format_bar(total.amount.to_decimal(), max.to_decimal(), BAR_WIDTH),
            total.amount.format_with_symbol(symbol)
        ));
    }

    output
}

/// Format a spending report with a bar per category
pub fn format_spending_report(
    report: &SpendingReport,
    registry: &CategoryRegistry,
    symbol: &str,
) -> String {
    let mut output = String::new();

    output.push_str(&format!("{}\n", report.title));
    output.push_str(&separator(60));
    output.push('\n');

    for category in &report.categories {
        output.push_str(&format!(
            "{} {:<14} {} {:>12} {:>6}\n",
            registry.resolve(&category.category).icon,
            truncate(&category.category_name, 14),
            format_bar(category.percentage, 100.0, BAR_WIDTH),
            category.total_spending.format_with_symbol(symbol),
            format_percentage(category.percentage)
        ));
    }

    output.push_str(&separator(60));
    output.push('\n');
    output.push_str(&format!(
        "Total: {} across {} expense{}\n",
        report.total_spending.format_with_symbol(symbol),
        report.total_expenses,
        if report.total_expenses == 1 { "" } else { "s" }
    ));

    output
}

/// Format the list of months that have expenses
pub fn format_month_list(months: &[MonthSummary]) -> String {
    if months.is_empty() {
        return "No expenses logged yet.\n".to_string();
    }

    let mut output = String::new();
    for month in months {
        output.push_str(&format!("{}  {}\n", month.month, month.label));
    }
    output
}

/// Format a remaining amount as "$x left" or, when negative, "$x over"
pub fn format_remaining(amount: Money, symbol: &str) -> String {
    if amount.is_negative() {
        format!("{} over", amount.abs().format_with_symbol(symbol))
    } else {
        format!("{} left", amount.format_with_symbol(symbol))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::YearMonth;

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(0.05), "0.05%");
        assert_eq!(format_percentage(5.5), "5.5%");
        assert_eq!(format_percentage(50.0), "50%");
    }

    #[test]
    fn test_format_bar() {
        let bar = format_bar(50.0, 100.0, 10);
        assert_eq!(bar.chars().filter(|c| *c == '█').count(), 5);
        assert_eq!(format_bar(0.0, 0.0, 4), "░░░░");
        assert_eq!(format_bar(150.0, 100.0, 4), "████");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Hello World", 5), "He...");
        assert_eq!(truncate("Hi", 5), "Hi");
        assert_eq!(truncate("Entertainment", 14), "Entertainment");
        assert_eq!(truncate("Café au lait", 6), "Caf...");
    }

    #[test]
    fn test_histogram_scales_to_largest() {
        let top = vec![
            CategoryTotal {
                category: "food".into(),
                amount: Money::from_units(50),
                count: 2,
            },
            CategoryTotal {
                category: "crypto".into(),
                amount: Money::from_units(25),
                count: 1,
            },
        ];
        let output = format_histogram(&top, &CategoryRegistry::standard(), "$");
        let lines: Vec<_> = output.lines().collect();

        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("Food"));
        assert_eq!(lines[0].matches('█').count(), BAR_WIDTH);
        assert!(lines[1].starts_with("❓ crypto"));
        assert_eq!(lines[1].matches('█').count(), BAR_WIDTH / 2);
    }

    #[test]
    fn test_histogram_empty() {
        assert!(format_histogram(&[], &CategoryRegistry::standard(), "$").is_empty());
    }

    #[test]
    fn test_month_list() {
        let months = vec![MonthSummary {
            month: YearMonth::new(2024, 3).unwrap(),
            label: "March 2024".into(),
        }];
        assert_eq!(format_month_list(&months), "2024-03  March 2024\n");
        assert_eq!(format_month_list(&[]), "No expenses logged yet.\n");
    }

    #[test]
    fn test_format_remaining() {
        assert_eq!(format_remaining(Money::from_units(40), "$"), "$40.00 left");
        assert_eq!(format_remaining(Money::from_units(-10), "$"), "$10.00 over");
    }
}
