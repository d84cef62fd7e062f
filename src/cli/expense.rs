//! Expense CLI commands
//!
//! Recording, listing and deleting expenses.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::expense::{format_expense_details, format_expense_table};
use crate::error::{SpendError, SpendResult};
use crate::models::{CategoryRegistry, ExpenseForm, ExpenseId, DATE_FORMAT};
use crate::services::{HistoryFilter, PeriodService};
use crate::storage::Storage;

/// Expense subcommands
#[derive(Subcommand, Debug)]
pub enum ExpenseCommands {
    /// Record a new expense
    Add {
        /// What the money was spent on
        description: String,
        /// Amount (e.g., "12.50")
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Expense date (YYYY-MM-DD, "today" or "yesterday"; defaults to today)
        #[arg(short, long)]
        date: Option<String>,
        /// Category key (defaults to the first standard category)
        #[arg(short, long)]
        category: Option<String>,
    },

    /// List expenses, newest first (today's by default)
    List {
        /// List every expense
        #[arg(short, long, conflicts_with_all = ["date", "month"])]
        all: bool,
        /// Only expenses on this date
        #[arg(short, long)]
        date: Option<String>,
        /// Only expenses in this month (e.g., "2024-03", "March", "last")
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Show one expense
    Show {
        /// Expense ID
        id: String,
    },

    /// Delete an expense
    #[command(alias = "rm")]
    Delete {
        /// Expense ID
        id: String,
    },
}

/// Handle an expense command
pub fn handle_expense_command(
    storage: &mut Storage,
    settings: &Settings,
    periods: &PeriodService,
    cmd: ExpenseCommands,
) -> SpendResult<()> {
    let registry = CategoryRegistry::standard();
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        ExpenseCommands::Add {
            description,
            amount,
            date,
            category,
        } => {
            let date = match date {
                // Relative dates are resolved here; anything else goes to the
                // form unchanged so it reports the format error
                Some(raw) => periods
                    .parse_date(&raw)
                    .map(|d| d.format(DATE_FORMAT).to_string())
                    .unwrap_or(raw),
                None => periods.reference_date().format(DATE_FORMAT).to_string(),
            };

            let category = match category {
                Some(raw) => match registry.get(&raw) {
                    Some(known) => known.key.to_string(),
                    None => {
                        if !raw.trim().is_empty() {
                            println!("Note: '{}' is not a standard category.", raw.trim());
                        }
                        raw
                    }
                },
                None => registry.default_key().to_string(),
            };

            let form = ExpenseForm {
                description,
                amount,
                date,
                category,
            };
            let expense = form.submit()?;
            storage.expenses.add(expense.clone())?;

            println!(
                "Added: {} ({})",
                expense.description,
                expense.amount.format_with_symbol(symbol)
            );
            println!("  ID: {}", expense.id);
        }

        ExpenseCommands::List { all, date, month } => {
            let filter = if all {
                HistoryFilter::All
            } else {
                let date = date.map(|d| periods.parse_date(&d)).transpose()?;
                let month = month.map(|m| periods.parse_month(&m)).transpose()?;
                match HistoryFilter::from_selection(date, month) {
                    HistoryFilter::All => HistoryFilter::Day(periods.reference_date()),
                    selected => selected,
                }
            };

            println!("Expenses: {}", filter.title());
            println!();

            let selected = filter.select(storage.expenses.all());
            print!(
                "{}",
                format_expense_table(
                    selected.into_iter().rev(),
                    &registry,
                    symbol,
                    settings.display_date_format()
                )
            );
        }

        ExpenseCommands::Show { id } => {
            let id = ExpenseId::new(id);
            let expense = storage
                .expenses
                .get(&id)
                .ok_or_else(|| SpendError::expense_not_found(id.as_str()))?;
            print!("{}", format_expense_details(expense, &registry, symbol));
        }

        ExpenseCommands::Delete { id } => {
            let id = ExpenseId::new(id);
            if storage.expenses.delete(&id)? {
                println!("Deleted expense {}", id);
            } else {
                println!("No expense with ID {}; nothing deleted.", id);
            }
        }
    }

    Ok(())
}
