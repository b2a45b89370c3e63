use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use fintrack::cli::{
    authenticate, handle_budget_command, handle_category_command, handle_expense_command,
    handle_export_command, handle_login, handle_report_command, handle_signup,
};
use fintrack::config::{paths::FinTrackPaths, settings::Settings};
use fintrack::services::ExpenseTracker;
use fintrack::storage::Storage;

#[derive(Parser)]
#[command(
    name = "fintrack",
    version,
    about = "Personal expense tracker with per-category budgets",
    long_about = "FinTrack records your expenses against categories, keeps \
                  per-category budget ceilings and summarizes your spending, \
                  all from the command line."
)]
struct Cli {
    /// User to act as (for expense, category, budget, report and export)
    #[arg(short, long, global = true, env = "FINTRACK_USER")]
    user: Option<String>,

    /// Log level when RUST_LOG is not set
    #[arg(long, global = true, default_value_t = LevelFilter::WARN)]
    log_level: LevelFilter,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create an account
    Signup {
        /// Username
        username: String,
    },

    /// Check your credentials
    Login {
        /// Username
        username: String,
    },

    /// Expense commands
    #[command(subcommand)]
    Expense(fintrack::cli::ExpenseCommands),

    /// Category commands
    #[command(subcommand)]
    Category(fintrack::cli::CategoryCommands),

    /// Budget commands
    #[command(subcommand)]
    Budget(fintrack::cli::BudgetCommands),

    /// Spending reports
    #[command(subcommand)]
    Report(fintrack::cli::ReportCommands),

    /// Export data to CSV
    #[command(subcommand)]
    Export(fintrack::cli::ExportCommands),

    /// Show current configuration and paths
    Config {
        /// Write the current settings to the settings file
        #[arg(long)]
        save: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.log_level);

    // Initialize paths and settings
    let paths = FinTrackPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    // Initialize storage
    let storage = Storage::new(paths.clone())?;

    let command = match cli.command {
        Some(command) => command,
        None => {
            println!("FinTrack - personal expense tracker");
            println!();
            println!("Run 'fintrack signup <username>' to create an account.");
            println!("Run 'fintrack --help' for usage information.");
            return Ok(());
        }
    };

    match command {
        Commands::Signup { username } => handle_signup(&storage, &username)?,
        Commands::Login { username } => handle_login(&storage, &username)?,
        Commands::Config { save } => {
            if save {
                settings.save(&paths)?;
                println!("Settings written to {}", paths.settings_file().display());
                println!();
            }
            println!("FinTrack Configuration");
            println!("======================");
            println!("Base directory:  {}", paths.base_dir().display());
            println!("Data directory:  {}", paths.data_dir().display());
            println!("Settings file:   {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:  {}", settings.currency_symbol);
            println!("  Date format:      {}", settings.date_format);
            println!("  Budget alerts:    {}", settings.alerts.enabled);
            println!("  Alert threshold:  {}%", settings.alerts.threshold_percent);
            println!("  Dashboard top-N:  {}", settings.dashboard_top_n);
        }
        Commands::Expense(cmd) => {
            let mut tracker = open_tracker(&storage, cli.user.as_deref())?;
            handle_expense_command(&mut tracker, &settings, cmd)?;
        }
        Commands::Category(cmd) => {
            let mut tracker = open_tracker(&storage, cli.user.as_deref())?;
            handle_category_command(&mut tracker, &settings, cmd)?;
        }
        Commands::Budget(cmd) => {
            let mut tracker = open_tracker(&storage, cli.user.as_deref())?;
            handle_budget_command(&mut tracker, &settings, cmd)?;
        }
        Commands::Report(cmd) => {
            let tracker = open_tracker(&storage, cli.user.as_deref())?;
            handle_report_command(&tracker, &settings, cmd)?;
        }
        Commands::Export(cmd) => {
            let tracker = open_tracker(&storage, cli.user.as_deref())?;
            handle_export_command(&tracker, cmd)?;
        }
    }

    Ok(())
}

/// Log in as the selected user and load their tracker
fn open_tracker<'a>(storage: &'a Storage, user: Option<&str>) -> Result<ExpenseTracker<'a>> {
    let username =
        user.context("This command needs a user: pass --user or set FINTRACK_USER")?;
    let user = authenticate(storage, username)?;
    Ok(ExpenseTracker::new(storage, user.username)?)
}

/// Initializes the tracing subscriber.
fn init_logger(level: LevelFilter) {
    let filter = match std::env::var("RUST_LOG").ok() {
        Some(_) => EnvFilter::from_default_env(),
        None => EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), level)),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
