//! Expense CLI commands

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{format_budget_alerts, format_expense_table};
use crate::error::{FinTrackError, FinTrackResult};
use crate::models::{Money, NewExpense};
use crate::reports::budget_alerts;
use crate::services::ExpenseTracker;

use super::session::FilterArgs;

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Record an expense
    Add {
        /// Amount (e.g., "12.50")
        amount: Money,
        /// Category name
        #[arg(short, long)]
        category: String,
        /// Expense date (YYYY-MM-DD, default: today)
        #[arg(long)]
        date: Option<NaiveDate>,
        /// Description
        #[arg(short, long, default_value = "")]
        description: String,
    },

    /// List expenses
    List {
        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Import expenses from a CSV file (date, category, amount, description)
    Import {
        /// Path to CSV file
        file: PathBuf,
    },
}

/// Handle an expense command
pub fn handle_expense_command(
    tracker: &mut ExpenseTracker<'_>,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> FinTrackResult<()> {
    let today = Local::now().date_naive();

    match cmd {
        ExpenseCommands::Add {
            amount,
            category,
            date,
            description,
        } => {
            let expense = NewExpense::new(date.unwrap_or(today), category, amount, description);
            tracker.add_expense(expense)?;
            println!("Expense added successfully.");
            print_alerts(tracker, settings);
        }

        ExpenseCommands::List { filter } => {
            let filter = filter.to_filter(tracker, today);
            let expenses = tracker.filter(&filter);
            println!(
                "{}",
                format_expense_table(&expenses, &settings.currency_symbol, &settings.date_format)
            );
        }

        ExpenseCommands::Import { file } => {
            let handle = File::open(&file).map_err(|e| {
                FinTrackError::Import(format!("Failed to open {}: {}", file.display(), e))
            })?;
            tracker.import_csv(BufReader::new(handle))?;
            println!("All expenses added successfully.");
            print_alerts(tracker, settings);
        }
    }

    Ok(())
}

/// Print budget alerts after a write, when alerts are enabled
fn print_alerts(tracker: &ExpenseTracker<'_>, settings: &Settings) {
    if !settings.alerts.enabled {
        return;
    }

    let threshold = f64::from(settings.alerts.threshold_percent);
    let alerts = budget_alerts(tracker.budgets(), tracker.expenses(), threshold);
    if !alerts.is_empty() {
        println!(
            "{}",
            format_budget_alerts(&alerts, &settings.currency_symbol, threshold)
        );
    }
}
