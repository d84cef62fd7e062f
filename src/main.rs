use anyhow::Result;
use clap::{Parser, Subcommand};

use spendlog::cli::{
    handle_budget_command, handle_category_command, handle_expense_command,
    handle_export_command, handle_history_command, show_dashboard,
};
use spendlog::config::{paths::SpendPaths, settings::Settings};
use spendlog::logging::init_tracing;
use spendlog::services::PeriodService;
use spendlog::storage::Storage;
use spendlog::{SpendError, SpendResult};

#[derive(Parser)]
#[command(
    name = "spendlog",
    version,
    about = "Local-first personal expense tracker",
    long_about = "spendlog records your daily expenses, tracks them against a monthly \
                  budget and optional per-category budgets, and shows where the money \
                  went by day, month and category."
)]
struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Expense management commands
    #[command(subcommand, alias = "exp")]
    Expense(spendlog::cli::ExpenseCommands),

    /// Budget management commands
    #[command(subcommand)]
    Budget(spendlog::cli::BudgetCommands),

    /// Spending history and reports
    #[command(subcommand)]
    History(spendlog::cli::HistoryCommands),

    /// Category commands
    #[command(subcommand)]
    Category(spendlog::cli::CategoryCommands),

    /// Export expenses and budgets
    Export(spendlog::cli::ExportArgs),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Initialize paths and settings
    let paths = SpendPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    // Initialize storage
    let mut storage = Storage::open(&paths)?;
    let periods = PeriodService::today();

    match run(cli.command, &paths, &settings, &periods, &mut storage) {
        Ok(()) => Ok(()),
        Err(SpendError::Validation(errors)) => {
            eprintln!("Could not save expense:");
            for (field, message) in errors.fields() {
                eprintln!("  {}: {}", field, message);
            }
            std::process::exit(1);
        }
        Err(e) => Err(e.into()),
    }
}

fn run(
    command: Option<Commands>,
    paths: &SpendPaths,
    settings: &Settings,
    periods: &PeriodService,
    storage: &mut Storage,
) -> SpendResult<()> {
    match command {
        Some(Commands::Expense(cmd)) => handle_expense_command(storage, settings, periods, cmd),
        Some(Commands::Budget(cmd)) => handle_budget_command(storage, settings, periods, cmd),
        Some(Commands::History(cmd)) => handle_history_command(storage, settings, periods, cmd),
        Some(Commands::Category(cmd)) => handle_category_command(storage, settings, cmd),
        Some(Commands::Export(args)) => handle_export_command(storage, args),
        Some(Commands::Config) => {
            println!("spendlog Configuration");
            println!("======================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Data directory: {}", paths.data_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
            println!("  Top categories:  {}", settings.top_categories);
            Ok(())
        }
        None => show_dashboard(storage, settings, periods),
    }
}
