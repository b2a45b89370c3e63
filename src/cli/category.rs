//! Category CLI commands

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{format_category_list, format_usage_table};
use crate::error::FinTrackResult;
use crate::reports::category_usage;
use crate::services::ExpenseTracker;

/// Category subcommands
#[derive(Subcommand)]
pub enum CategoryCommands {
    /// List available categories
    List,

    /// Add a category
    Add {
        /// Category name
        name: String,
    },

    /// Show expense count and total per category
    Usage,
}

/// Handle a category command
pub fn handle_category_command(
    tracker: &mut ExpenseTracker<'_>,
    settings: &Settings,
    cmd: CategoryCommands,
) -> FinTrackResult<()> {
    match cmd {
        CategoryCommands::List => {
            print!("{}", format_category_list(&tracker.available_categories()));
        }

        CategoryCommands::Add { name } => {
            let category = tracker.add_category(&name)?;
            println!("Category added: {}", category);
        }

        CategoryCommands::Usage => {
            let usage = category_usage(tracker.expenses());
            println!("{}", format_usage_table(&usage, &settings.currency_symbol));
        }
    }

    Ok(())
}
