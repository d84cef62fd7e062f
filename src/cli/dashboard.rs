//! Default dashboard
//!
//! Shown when spendlog runs without a subcommand: this month's budget,
//! then today's spending.

use crate::config::settings::Settings;
use crate::display::budget::format_monthly_summary;
use crate::display::expense::format_expense_table;
use crate::display::report::format_histogram;
use crate::error::SpendResult;
use crate::models::{CategoryRegistry, Period};
use crate::reports::{aggregate_by_category, top_categories};
use crate::services::{filter_by_period, total, BudgetService, PeriodService};
use crate::storage::Storage;

/// Print the dashboard
pub fn show_dashboard(
    storage: &Storage,
    settings: &Settings,
    periods: &PeriodService,
) -> SpendResult<()> {
    let registry = CategoryRegistry::standard();
    let symbol = settings.currency_symbol.as_str();
    let today = periods.reference_date();

    let overview = BudgetService::new(storage, today).overview();
    print!("{}", format_monthly_summary(&overview, symbol));
    println!();

    let todays = filter_by_period(storage.expenses.all(), today, Period::Day);
    let top = top_categories(aggregate_by_category(todays.clone()), settings.top_categories);

    println!("Today ({})", today.format(settings.display_date_format()));
    if top.is_empty() {
        println!("Nothing spent today.");
        return Ok(());
    }

    print!("{}", format_histogram(&top, &registry, symbol));
    println!();

    let mut newest_first: Vec<_> = todays.clone().collect();
    newest_first.reverse();
    print!(
        "{}",
        format_expense_table(newest_first, &registry, symbol, settings.display_date_format())
    );
    println!("Today's total: {}", total(todays).format_with_symbol(symbol));

    Ok(())
}
