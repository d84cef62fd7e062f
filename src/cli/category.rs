//! Category CLI commands

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::category::format_category_list;
use crate::error::SpendResult;
use crate::models::CategoryRegistry;
use crate::storage::Storage;

/// Category subcommands
#[derive(Subcommand, Debug)]
pub enum CategoryCommands {
    /// List the standard categories with their budgets
    List,
}

/// Handle a category command
pub fn handle_category_command(
    storage: &Storage,
    settings: &Settings,
    cmd: CategoryCommands,
) -> SpendResult<()> {
    match cmd {
        CategoryCommands::List => {
            let listing = format_category_list(
                &CategoryRegistry::standard(),
                storage.budgets.category_budgets(),
                &settings.currency_symbol,
            );
            println!("{}", listing.trim_end());
        }
    }

    Ok(())
}
