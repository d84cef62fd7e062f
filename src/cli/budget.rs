//! Budget CLI commands
//!
//! Implements CLI commands for the monthly and per-category budgets.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::budget::{format_category_budgets, format_monthly_summary};
use crate::error::{SpendError, SpendResult};
use crate::models::{CategoryRegistry, Money};
use crate::services::{BudgetService, PeriodService};
use crate::storage::Storage;

/// Budget subcommands
#[derive(Subcommand, Debug)]
pub enum BudgetCommands {
    /// Show this month's budget status
    Show {
        /// Include the per-category breakdown
        #[arg(short = 'c', long)]
        by_category: bool,
    },

    /// Set the monthly budget (0 clears it)
    Set {
        /// Amount (e.g., "500" or "500.00")
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },

    /// Set the budget for one category (0 clears it)
    SetCategory {
        /// Category key
        category: String,
        /// Amount (e.g., "100" or "100.00")
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },
}

fn parse_amount(raw: &str) -> SpendResult<Money> {
    Money::parse(raw).map_err(|e| SpendError::InvalidInput(e.to_string()))
}

/// Handle a budget command
pub fn handle_budget_command(
    storage: &mut Storage,
    settings: &Settings,
    periods: &PeriodService,
    cmd: BudgetCommands,
) -> SpendResult<()> {
    let registry = CategoryRegistry::standard();
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        BudgetCommands::Show { by_category } => {
            let overview = BudgetService::new(storage, periods.reference_date()).overview();

            print!("{}", format_monthly_summary(&overview, symbol));
            if by_category {
                println!();
                print!("{}", format_category_budgets(&overview, &registry, symbol));
            }
        }

        BudgetCommands::Set { amount } => {
            let amount = parse_amount(&amount)?;
            match storage.budgets.set_monthly_budget(amount)? {
                Some(budget) => println!(
                    "Monthly budget set to {}",
                    budget.amount.format_with_symbol(symbol)
                ),
                None => println!("Monthly budget cleared"),
            }
        }

        BudgetCommands::SetCategory { category, amount } => {
            let amount = parse_amount(&amount)?;
            let key = match registry.get(&category) {
                Some(known) => known.key.to_string(),
                None => {
                    let trimmed = category.trim();
                    if trimmed.is_empty() {
                        return Err(SpendError::InvalidInput("Category is required.".into()));
                    }
                    println!("Note: '{}' is not a standard category.", trimmed);
                    trimmed.to_string()
                }
            };
            let name = registry.display_name(&key).to_string();

            match storage.budgets.set_category_budget(&key, amount)? {
                Some(budget) => println!(
                    "{} budget set to {}",
                    name,
                    budget.amount.format_with_symbol(symbol)
                ),
                None => println!("{} budget cleared", name),
            }
        }
    }

    Ok(())
}
