//! Display formatting for terminal output
//!
//! Provides utilities for formatting expenses, budgets and reports for
//! terminal display.

pub mod budget;
pub mod category;
pub mod expense;
pub mod report;

pub use budget::{format_category_budgets, format_monthly_summary, format_progress};
pub use category::format_category_list;
pub use expense::{category_label, format_expense_details, format_expense_row, format_expense_table};
pub use report::{format_histogram, format_month_list, format_spending_report};
