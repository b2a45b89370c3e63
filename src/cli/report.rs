//! Report CLI commands

use chrono::Local;
use clap::Subcommand;

use crate::config::settings::Settings;
use crate::error::FinTrackResult;
use crate::reports::{DashboardReport, MonthComparison};
use crate::services::ExpenseTracker;

use super::session::FilterArgs;

/// Report subcommands
#[derive(Subcommand)]
pub enum ReportCommands {
    /// Spending dashboard for a filter window
    Dashboard {
        #[command(flatten)]
        filter: FilterArgs,

        /// Rows in the recent and largest expense lists (default: from settings)
        #[arg(long)]
        top: Option<usize>,
    },

    /// This month against last month
    Compare,
}

/// Handle a report command
pub fn handle_report_command(
    tracker: &ExpenseTracker<'_>,
    settings: &Settings,
    cmd: ReportCommands,
) -> FinTrackResult<()> {
    let today = Local::now().date_naive();

    match cmd {
        ReportCommands::Dashboard { filter, top } => {
            let filter = filter.to_filter(tracker, today);
            let top_n = top.unwrap_or(settings.dashboard_top_n);
            let report = DashboardReport::generate(tracker, &filter, today, top_n);
            print!("{}", report.format_terminal(&settings.currency_symbol));
        }

        ReportCommands::Compare => {
            let comparison = MonthComparison::generate(tracker.expenses(), today);
            print!("{}", comparison.format_terminal(&settings.currency_symbol));
        }
    }

    Ok(())
}
