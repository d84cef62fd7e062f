//! CLI command for data export
//!
//! Writes the expense log and budgets to a file or stdout.

use clap::{Args, ValueEnum};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use crate::error::{SpendError, SpendResult};
use crate::export::{export_expenses_csv, export_full_json, export_full_yaml};
use crate::models::CategoryRegistry;
use crate::storage::Storage;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// CSV format (expenses only)
    Csv,
    /// JSON format (expenses and budgets)
    Json,
    /// YAML format (expenses and budgets, human-readable)
    Yaml,
}

/// Export arguments
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Export format
    #[arg(short, long, value_enum, default_value = "json")]
    pub format: ExportFormat,

    /// Output file path (stdout if omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

/// Handle the export command
pub fn handle_export_command(storage: &Storage, args: ExportArgs) -> SpendResult<()> {
    match &args.output {
        Some(output) => {
            let file = File::create(output).map_err(|e| {
                SpendError::Export(format!(
                    "Failed to create file {}: {}",
                    output.display(),
                    e
                ))
            })?;
            let mut writer = BufWriter::new(file);
            write_export(storage, args.format, args.pretty, &mut writer)?;
            writer
                .flush()
                .map_err(|e| SpendError::Export(e.to_string()))?;

            let what = match args.format {
                ExportFormat::Csv => "Expenses",
                ExportFormat::Json | ExportFormat::Yaml => "Expenses and budgets",
            };
            println!("{} exported to: {}", what, output.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            write_export(storage, args.format, args.pretty, &mut stdout)?;
            if args.format == ExportFormat::Json {
                writeln!(stdout).map_err(|e| SpendError::Export(e.to_string()))?;
            }
        }
    }

    Ok(())
}

fn write_export<W: Write>(
    storage: &Storage,
    format: ExportFormat,
    pretty: bool,
    writer: &mut W,
) -> SpendResult<()> {
    tracing::debug!(?format, "exporting");
    match format {
        ExportFormat::Csv => export_expenses_csv(
            storage.expenses.all(),
            &CategoryRegistry::standard(),
            writer,
        ),
        ExportFormat::Json => export_full_json(storage, writer, pretty),
        ExportFormat::Yaml => export_full_yaml(storage, writer),
    }
}
