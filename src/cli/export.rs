//! CLI commands for data export

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::Local;
use clap::Subcommand;

use crate::error::{FinTrackError, FinTrackResult};
use crate::export::{export_budgets_csv, export_expenses_csv};
use crate::services::ExpenseTracker;

use super::session::FilterArgs;

/// Export subcommands
#[derive(Subcommand, Debug)]
pub enum ExportCommands {
    /// Export all of your expenses to CSV
    Expenses {
        /// Output file path
        output: PathBuf,
    },

    /// Export expenses matching a filter to CSV
    Filtered {
        /// Output file path
        output: PathBuf,

        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Export your budgets to CSV
    Budgets {
        /// Output file path
        output: PathBuf,
    },
}

/// Handle export commands
pub fn handle_export_command(tracker: &ExpenseTracker<'_>, cmd: ExportCommands) -> FinTrackResult<()> {
    match cmd {
        ExportCommands::Expenses { output } => {
            write_file(&output, |w| export_expenses_csv(tracker.expenses(), w))?;
            println!(
                "Exported {} expenses to: {}",
                tracker.expenses().len(),
                output.display()
            );
        }

        ExportCommands::Filtered { output, filter } => {
            let filter = filter.to_filter(tracker, Local::now().date_naive());
            let expenses = tracker.filter(&filter);
            write_file(&output, |w| export_expenses_csv(&expenses, w))?;
            println!(
                "Exported {} filtered expenses to: {}",
                expenses.len(),
                output.display()
            );
        }

        ExportCommands::Budgets { output } => {
            write_file(&output, |w| export_budgets_csv(tracker.budgets(), w))?;
            println!(
                "Exported {} budgets to: {}",
                tracker.budgets().len(),
                output.display()
            );
        }
    }

    Ok(())
}

/// Create `output` and run `write` against a buffered handle
fn write_file<F>(output: &Path, write: F) -> FinTrackResult<()>
where
    F: FnOnce(&mut BufWriter<File>) -> FinTrackResult<()>,
{
    let file = File::create(output).map_err(|e| {
        FinTrackError::Export(format!("Failed to create file {}: {}", output.display(), e))
    })?;
    let mut writer = BufWriter::new(file);

    write(&mut writer)?;
    writer
        .flush()
        .map_err(|e| FinTrackError::Export(e.to_string()))?;

    Ok(())
}
