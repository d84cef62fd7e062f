//! History CLI commands
//!
//! Browsing past spending by day or month, and the category report.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::expense::format_expense_table;
use crate::display::report::{format_histogram, format_month_list, format_spending_report};
use crate::error::SpendResult;
use crate::models::CategoryRegistry;
use crate::reports::SpendingReport;
use crate::services::{
    filter_by_month, list_distinct_periods, select_history, HistoryFilter, HistoryView,
    PeriodService,
};
use crate::storage::Storage;

/// History subcommands
#[derive(Subcommand, Debug)]
pub enum HistoryCommands {
    /// Show expenses with a category breakdown (all time by default)
    Show {
        /// Only expenses on this date
        #[arg(short, long)]
        date: Option<String>,
        /// Only expenses in this month
        #[arg(short, long)]
        month: Option<String>,
    },

    /// List the months that have expenses, newest first
    Months,

    /// Spending by category for a month
    Report {
        /// Month to report on (defaults to the current month)
        #[arg(short, long)]
        month: Option<String>,
        /// Write the report as CSV to stdout
        #[arg(long)]
        csv: bool,
    },
}

/// Handle a history command
pub fn handle_history_command(
    storage: &Storage,
    settings: &Settings,
    periods: &PeriodService,
    cmd: HistoryCommands,
) -> SpendResult<()> {
    let registry = CategoryRegistry::standard();
    let symbol = settings.currency_symbol.as_str();
    let expenses = storage.expenses.all();

    match cmd {
        HistoryCommands::Show { date, month } => {
            let date = date.map(|d| periods.parse_date(&d)).transpose()?;
            let month = month.map(|m| periods.parse_month(&m)).transpose()?;
            let filter = HistoryFilter::from_selection(date, month);

            println!("History: {}", filter.title());
            println!();

            let view = select_history(expenses, filter, settings.top_categories);
            match view {
                HistoryView::Expenses {
                    expenses,
                    total,
                    top,
                } => {
                    print!(
                        "{}",
                        format_expense_table(
                            expenses,
                            &registry,
                            symbol,
                            settings.display_date_format()
                        )
                    );
                    println!();
                    println!("Top categories");
                    print!("{}", format_histogram(&top, &registry, symbol));
                    println!();
                    println!("Total: {}", total.format_with_symbol(symbol));
                }
                empty => {
                    if let Some(message) = empty.empty_message() {
                        println!("{}", message);
                    }
                }
            }
        }

        HistoryCommands::Months => {
            print!("{}", format_month_list(&list_distinct_periods(expenses)));
        }

        HistoryCommands::Report { month, csv } => {
            let month = match month {
                Some(raw) => periods.parse_month(&raw)?,
                None => periods.current_month(),
            };

            let report = SpendingReport::generate(
                format!("Spending by Category: {}", month.label()),
                filter_by_month(expenses, month),
                &registry,
            );

            if csv {
                report.export_csv(std::io::stdout().lock())?;
            } else if report.is_empty() {
                println!("No expenses for {}.", month.label());
            } else {
                print!("{}", format_spending_report(&report, &registry, symbol));
            }
        }
    }

    Ok(())
}
