//! Login and shared arguments for user-scoped commands
//!
//! Every user-scoped command authenticates first. The password comes from
//! `FINTRACK_PASSWORD` when set, otherwise from a hidden prompt.

use chrono::NaiveDate;
use clap::Args;

use crate::crypto::SecureString;
use crate::error::{FinTrackError, FinTrackResult};
use crate::models::{ExpenseFilter, Money, User};
use crate::services::{CredentialService, ExpenseTracker};
use crate::storage::Storage;

/// Environment variable holding the password for non-interactive use
pub const PASSWORD_ENV: &str = "FINTRACK_PASSWORD";

/// Read a password from the environment or a hidden prompt
pub fn read_password(prompt: &str) -> FinTrackResult<SecureString> {
    if let Ok(password) = std::env::var(PASSWORD_ENV) {
        return Ok(SecureString::new(password));
    }

    rpassword::prompt_password(prompt)
        .map(SecureString::new)
        .map_err(|e| FinTrackError::Authentication(format!("Failed to read password: {}", e)))
}

/// Read a new password, asking twice when prompting interactively
pub fn read_new_password() -> FinTrackResult<SecureString> {
    if std::env::var(PASSWORD_ENV).is_ok() {
        return read_password("");
    }

    let first = read_password("Choose a password: ")?;
    let second = read_password("Confirm password: ")?;
    if first.as_str() != second.as_str() {
        return Err(FinTrackError::Validation("Passwords do not match".into()));
    }
    Ok(first)
}

/// Log in as `username`, prompting for the password
pub fn authenticate(storage: &Storage, username: &str) -> FinTrackResult<User> {
    let password = read_password(&format!("Password for {}: ", username))?;
    CredentialService::new(storage).login(username, &password)
}

/// Expense filter flags shared by listing, reporting and export
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// First date to include (YYYY-MM-DD, default: earliest expense)
    #[arg(long)]
    pub start: Option<NaiveDate>,

    /// Last date to include (YYYY-MM-DD, default: latest expense)
    #[arg(long)]
    pub end: Option<NaiveDate>,

    /// Only these categories (repeatable)
    #[arg(short, long = "category")]
    pub categories: Vec<String>,

    /// Minimum amount
    #[arg(long)]
    pub min: Option<Money>,

    /// Maximum amount
    #[arg(long)]
    pub max: Option<Money>,
}

impl FilterArgs {
    /// Build a filter, defaulting the window to the ledger's date range
    ///
    /// An empty ledger defaults both ends to `today`.
    pub fn to_filter(&self, tracker: &ExpenseTracker<'_>, today: NaiveDate) -> ExpenseFilter {
        let (first, last) = tracker.date_range().unwrap_or((today, today));

        let mut filter = ExpenseFilter::between(
            self.start.unwrap_or(first),
            self.end.unwrap_or(last),
        )
        .with_categories(self.categories.iter().cloned());
        filter.min_amount = self.min;
        filter.max_amount = self.max;
        filter
    }
}
