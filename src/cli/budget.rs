//! Budget CLI commands

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{format_budget_alerts, format_budget_table};
use crate::error::{FinTrackError, FinTrackResult};
use crate::models::Money;
use crate::reports::{budget_alerts, budget_status};
use crate::services::ExpenseTracker;

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Show budgets with spending to date
    List,

    /// Set or replace the budget for a category
    Set {
        /// Category name
        category: String,
        /// Budget amount (e.g., "500.00")
        amount: Money,
    },

    /// Remove the budget for a category
    Remove {
        /// Category name
        category: String,
    },

    /// Show budgets at or above an alert threshold
    Alerts {
        /// Threshold percentage (default: from settings)
        #[arg(short, long)]
        threshold: Option<u8>,
    },
}

/// Handle a budget command
pub fn handle_budget_command(
    tracker: &mut ExpenseTracker<'_>,
    settings: &Settings,
    cmd: BudgetCommands,
) -> FinTrackResult<()> {
    let currency = settings.currency_symbol.as_str();

    match cmd {
        BudgetCommands::List => {
            let statuses = budget_status(tracker.budgets(), tracker.expenses());
            println!("{}", format_budget_table(&statuses, currency));
        }

        BudgetCommands::Set { category, amount } => {
            let budget = tracker.set_budget(&category, amount)?;
            println!(
                "Budget updated: {} {}",
                budget.category,
                budget.amount.format_with_symbol(currency)
            );
        }

        BudgetCommands::Remove { category } => {
            if tracker.remove_budget(&category)? {
                println!("Budget for {} removed", category);
            } else {
                println!("No budget set for {}", category);
            }
        }

        BudgetCommands::Alerts { threshold } => {
            let threshold = threshold.unwrap_or(settings.alerts.threshold_percent);
            if threshold > 100 {
                return Err(FinTrackError::Validation(format!(
                    "Alert threshold must be between 0 and 100, got {}",
                    threshold
                )));
            }

            let threshold = f64::from(threshold);
            let alerts = budget_alerts(tracker.budgets(), tracker.expenses(), threshold);
            println!("{}", format_budget_alerts(&alerts, currency, threshold));
        }
    }

    Ok(())
}
