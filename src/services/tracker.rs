//! Expense tracker
//!
//! [`ExpenseTracker`] is the per-user entry point for recording and querying
//! expenses. It holds an in-memory snapshot of the user's expenses,
//! categories and budgets, validates new expenses against that snapshot and
//! reloads it after every write.
//!
//! The snapshot is not refreshed from disk before validation. A second
//! process writing the same tables can make the budget check stale.

use std::collections::BTreeSet;
use std::io::Read;

use chrono::NaiveDate;
use tracing::{debug, info, warn};

use crate::error::{FinTrackError, FinTrackResult};
use crate::models::{Budget, Expense, ExpenseFilter, Money, NewExpense, UserCategory};
use crate::storage::Storage;

use super::budget::BudgetService;
use super::category::{merge_with_defaults, CategoryService};
use super::import::parse_expenses;

/// Expense ledger operations for one authenticated user
pub struct ExpenseTracker<'a> {
    storage: &'a Storage,
    username: String,
    expenses: Vec<Expense>,
    custom_categories: Vec<UserCategory>,
    budgets: Vec<Budget>,
}

impl<'a> ExpenseTracker<'a> {
    /// Create a tracker for `username` and load its snapshot
    pub fn new(storage: &'a Storage, username: impl Into<String>) -> FinTrackResult<Self> {
        let mut tracker = Self {
            storage,
            username: username.into(),
            expenses: Vec::new(),
            custom_categories: Vec::new(),
            budgets: Vec::new(),
        };
        tracker.reload()?;
        Ok(tracker)
    }

    /// Re-read the user's rows from all three tables
    pub fn reload(&mut self) -> FinTrackResult<()> {
        self.expenses = self.storage.expenses.get_for_user(&self.username)?;
        self.custom_categories = self.storage.categories.get_for_user(&self.username)?;
        self.budgets = self.storage.budgets.get_for_user(&self.username)?;

        debug!(
            username = %self.username,
            expenses = self.expenses.len(),
            categories = self.custom_categories.len(),
            budgets = self.budgets.len(),
            "tracker snapshot loaded"
        );
        Ok(())
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// The user's expenses in recorded order
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn budgets(&self) -> &[Budget] {
        &self.budgets
    }

    pub fn custom_categories(&self) -> &[UserCategory] {
        &self.custom_categories
    }

    /// Defaults plus the user's own categories, sorted
    pub fn available_categories(&self) -> BTreeSet<String> {
        merge_with_defaults(&self.custom_categories)
    }

    /// The budget for a category, if one is set
    pub fn budget_for(&self, category: &str) -> Option<&Budget> {
        self.budgets.iter().find(|b| b.category == category)
    }

    /// Total recorded for a category across all dates
    pub fn category_total(&self, category: &str) -> Money {
        self.expenses
            .iter()
            .filter(|e| e.category == category)
            .map(|e| e.amount)
            .sum()
    }

    /// Earliest and latest expense dates, or `None` for an empty ledger
    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        let min = self.expenses.iter().map(|e| e.date).min()?;
        let max = self.expenses.iter().map(|e| e.date).max()?;
        Some((min, max))
    }

    /// Largest single expense (zero for an empty ledger)
    pub fn max_amount(&self) -> Money {
        self.expenses
            .iter()
            .map(|e| e.amount)
            .max()
            .unwrap_or_default()
    }

    /// Validate and record one expense
    ///
    /// The category must be available to the user, and if the category has a
    /// budget, the category's running total plus this amount must not exceed
    /// it. Landing exactly on the budget is allowed.
    pub fn add_expense(&mut self, expense: NewExpense) -> FinTrackResult<Expense> {
        if !self.available_categories().contains(&expense.category) {
            return Err(FinTrackError::UnknownCategory(expense.category));
        }

        if expense.amount.is_negative() {
            return Err(FinTrackError::Validation(
                "Expense amount cannot be negative".into(),
            ));
        }

        if let Some(budget) = self.budget_for(&expense.category) {
            let spent = self.category_total(&expense.category);
            if !budget.allows(spent, expense.amount) {
                warn!(
                    username = %self.username,
                    category = %expense.category,
                    limit = %budget.amount,
                    spent = %spent,
                    attempted = %expense.amount,
                    "expense rejected: budget exceeded"
                );
                return Err(FinTrackError::BudgetExceeded {
                    category: expense.category,
                    limit: budget.amount,
                    spent,
                    attempted: expense.amount,
                });
            }
        }

        let expense = expense.into_expense(self.username.clone());
        self.storage.expenses.append(expense.clone())?;
        self.reload()?;

        info!(
            username = %self.username,
            category = %expense.category,
            amount = %expense.amount,
            "expense added"
        );
        Ok(expense)
    }

    /// Record several expenses, one at a time and in order
    ///
    /// This is not atomic. Rows that pass are committed even when a later
    /// row fails. Returns the number of rows recorded, or a
    /// [`FinTrackError::BulkImport`] listing every rejected row.
    pub fn add_bulk<I>(&mut self, rows: I) -> FinTrackResult<usize>
    where
        I: IntoIterator<Item = NewExpense>,
    {
        let mut imported = 0;
        let mut failures = Vec::new();

        for row in rows {
            let description = row.description.clone();
            match self.add_expense(row) {
                Ok(_) => imported += 1,
                Err(e) if e.is_validation() || e.is_budget_exceeded() => {
                    failures.push(format!("Row with {}: {}", description, e));
                }
                Err(e) => return Err(FinTrackError::Import(e.to_string())),
            }
        }

        info!(
            username = %self.username,
            imported,
            failed = failures.len(),
            "bulk import finished"
        );

        if failures.is_empty() {
            Ok(imported)
        } else {
            Err(FinTrackError::BulkImport { imported, failures })
        }
    }

    /// Parse a CSV upload and record its rows
    ///
    /// A file with a missing column, a bad date or a bad amount is rejected
    /// before anything is written.
    pub fn import_csv<R: Read>(&mut self, reader: R) -> FinTrackResult<usize> {
        let rows = parse_expenses(reader)?;
        debug!(username = %self.username, rows = rows.len(), "import file parsed");
        self.add_bulk(rows)
    }

    /// Expenses matching a filter, in recorded order
    pub fn filter(&self, filter: &ExpenseFilter) -> Vec<Expense> {
        self.expenses
            .iter()
            .filter(|e| filter.matches(e))
            .cloned()
            .collect()
    }

    /// Add a category for this user and reload
    pub fn add_category(&mut self, name: &str) -> FinTrackResult<UserCategory> {
        let category = CategoryService::new(self.storage).add(&self.username, name)?;
        self.reload()?;
        Ok(category)
    }

    /// Set a budget for this user and reload
    pub fn set_budget(&mut self, category: &str, amount: Money) -> FinTrackResult<Budget> {
        let budget = BudgetService::new(self.storage).set(&self.username, category, amount)?;
        self.reload()?;
        Ok(budget)
    }

    /// Remove a budget for this user and reload
    pub fn remove_budget(&mut self, category: &str) -> FinTrackResult<bool> {
        let removed = BudgetService::new(self.storage).remove(&self.username, category)?;
        self.reload()?;
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::FinTrackPaths;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinTrackPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        (temp_dir, storage)
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn food(cents: i64) -> NewExpense {
        NewExpense::new(date(2024, 1, 10), "Food", Money::from_cents(cents), "meal")
    }

    #[test]
    fn test_budget_ceiling_scenario() {
        let (_temp_dir, storage) = create_test_storage();
        let mut tracker = ExpenseTracker::new(&storage, "alice").unwrap();

        tracker.set_budget("Food", Money::from_cents(10000)).unwrap();

        tracker.add_expense(food(6000)).unwrap();
        assert_eq!(tracker.category_total("Food"), Money::from_cents(6000));

        tracker.add_expense(food(4000)).unwrap();
        assert_eq!(tracker.category_total("Food"), Money::from_cents(10000));

        let err = tracker.add_expense(food(1)).unwrap_err();
        assert!(err.is_budget_exceeded());
        assert_eq!(
            err.to_string(),
            "Adding this expense would exceed your budget for this category."
        );
        assert_eq!(tracker.category_total("Food"), Money::from_cents(10000));
        assert_eq!(storage.expenses.get_for_user("alice").unwrap().len(), 2);
    }

    #[test]
    fn test_huge_amounts_do_not_overflow() {
        let (_temp_dir, storage) = create_test_storage();
        let mut tracker = ExpenseTracker::new(&storage, "alice").unwrap();
        let huge = Money::parse("92233720368547757").unwrap();

        tracker.add_expense(food(huge.cents())).unwrap();
        tracker.add_expense(food(huge.cents())).unwrap();
        assert_eq!(tracker.category_total("Food"), Money::from_cents(i64::MAX));

        tracker.set_budget("Food", Money::from_cents(100)).unwrap();
        let err = tracker.add_expense(food(huge.cents())).unwrap_err();
        assert!(err.is_budget_exceeded());
        assert_eq!(storage.expenses.get_for_user("alice").unwrap().len(), 2);
    }

    #[test]
    fn test_budget_counts_all_dates() {
        let (_temp_dir, storage) = create_test_storage();
        let mut tracker = ExpenseTracker::new(&storage, "alice").unwrap();
        tracker.set_budget("Food", Money::from_cents(1000)).unwrap();

        tracker
            .add_expense(NewExpense::new(date(2020, 1, 1), "Food", Money::from_cents(900), "old"))
            .unwrap();
        let err = tracker
            .add_expense(NewExpense::new(date(2024, 6, 1), "Food", Money::from_cents(200), "new"))
            .unwrap_err();
        assert!(err.is_budget_exceeded());
    }

    #[test]
    fn test_unknown_category() {
        let (_temp_dir, storage) = create_test_storage();
        let mut tracker = ExpenseTracker::new(&storage, "alice").unwrap();

        let err = tracker
            .add_expense(NewExpense::new(date(2024, 1, 1), "Pets", Money::from_cents(100), "x"))
            .unwrap_err();
        assert_eq!(err.to_string(), "Category does not exist.");
        assert!(tracker.expenses().is_empty());

        tracker.add_category("Pets").unwrap();
        assert!(tracker
            .add_expense(NewExpense::new(date(2024, 1, 1), "Pets", Money::from_cents(100), "x"))
            .is_ok());
    }

    #[test]
    fn test_negative_amount_rejected() {
        let (_temp_dir, storage) = create_test_storage();
        let mut tracker = ExpenseTracker::new(&storage, "alice").unwrap();

        assert!(tracker.add_expense(food(-100)).unwrap_err().is_validation());
    }

    #[test]
    fn test_users_do_not_share_budgets() {
        let (_temp_dir, storage) = create_test_storage();
        let mut alice = ExpenseTracker::new(&storage, "alice").unwrap();
        alice.set_budget("Food", Money::from_cents(100)).unwrap();

        let mut bob = ExpenseTracker::new(&storage, "bob").unwrap();
        assert!(bob.add_expense(food(5000)).is_ok());
        assert!(alice.expenses().is_empty());
    }

    #[test]
    fn test_remove_budget_lifts_ceiling() {
        let (_temp_dir, storage) = create_test_storage();
        let mut tracker = ExpenseTracker::new(&storage, "alice").unwrap();
        tracker.set_budget("Food", Money::from_cents(100)).unwrap();

        assert!(tracker.add_expense(food(500)).is_err());
        assert!(tracker.remove_budget("Food").unwrap());
        assert!(tracker.add_expense(food(500)).is_ok());
        assert!(!tracker.remove_budget("Food").unwrap());
    }

    #[test]
    fn test_bulk_upload_is_not_atomic() {
        let (_temp_dir, storage) = create_test_storage();
        let mut tracker = ExpenseTracker::new(&storage, "alice").unwrap();

        let csv_data = "date,category,amount,description\n\
                        2024-01-01,Food,20,lunch\n\
                        2024-01-02,NoSuchCat,5,x\n";

        let err = tracker.import_csv(csv_data.as_bytes()).unwrap_err();
        match &err {
            FinTrackError::BulkImport { imported, failures } => {
                assert_eq!(*imported, 1);
                assert_eq!(failures.len(), 1);
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(err.to_string(), "Row with x: Category does not exist.");

        let stored = storage.expenses.get_for_user("alice").unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].description, "lunch");
        assert_eq!(stored[0].amount, Money::from_cents(2000));
        assert_eq!(tracker.expenses().len(), 1);
    }

    #[test]
    fn test_bulk_rows_see_earlier_rows() {
        let (_temp_dir, storage) = create_test_storage();
        let mut tracker = ExpenseTracker::new(&storage, "alice").unwrap();
        tracker.set_budget("Food", Money::from_cents(3000)).unwrap();

        let rows = vec![
            NewExpense::new(date(2024, 1, 1), "Food", Money::from_cents(2000), "a"),
            NewExpense::new(date(2024, 1, 2), "Food", Money::from_cents(2000), "b"),
            NewExpense::new(date(2024, 1, 3), "Food", Money::from_cents(1000), "c"),
        ];

        let err = tracker.add_bulk(rows).unwrap_err();
        assert!(err.to_string().contains("Row with b"));
        assert_eq!(tracker.category_total("Food"), Money::from_cents(3000));
    }

    #[test]
    fn test_bulk_success_counts_rows() {
        let (_temp_dir, storage) = create_test_storage();
        let mut tracker = ExpenseTracker::new(&storage, "alice").unwrap();

        let csv_data = "date,category,amount,description\n\
                        2024-01-01,Food,20,lunch\n\
                        2024-01-02,Transport,5,bus\n";
        assert_eq!(tracker.import_csv(csv_data.as_bytes()).unwrap(), 2);
    }

    #[test]
    fn test_bad_file_inserts_nothing() {
        let (_temp_dir, storage) = create_test_storage();
        let mut tracker = ExpenseTracker::new(&storage, "alice").unwrap();

        let bad_date = "date,category,amount,description\n\
                        2024-01-01,Food,20,lunch\n\
                        01.02.2024,Food,5,snack\n";
        assert!(tracker.import_csv(bad_date.as_bytes()).is_err());

        let missing = "date,category,amount\n2024-01-01,Food,20\n";
        assert!(tracker.import_csv(missing.as_bytes()).is_err());

        assert!(storage.expenses.get_all().unwrap().is_empty());
    }

    #[test]
    fn test_filter() {
        let (_temp_dir, storage) = create_test_storage();
        let mut tracker = ExpenseTracker::new(&storage, "alice").unwrap();

        assert!(tracker
            .filter(&ExpenseFilter::between(date(2000, 1, 1), date(2100, 1, 1)))
            .is_empty());
        assert_eq!(tracker.date_range(), None);
        assert_eq!(tracker.max_amount(), Money::zero());

        tracker
            .add_expense(NewExpense::new(date(2024, 1, 1), "Food", Money::from_cents(500), "a"))
            .unwrap();
        tracker
            .add_expense(NewExpense::new(date(2024, 1, 15), "Transport", Money::from_cents(1500), "b"))
            .unwrap();
        tracker
            .add_expense(NewExpense::new(date(2024, 2, 1), "Food", Money::from_cents(2500), "c"))
            .unwrap();

        let january = tracker.filter(&ExpenseFilter::between(date(2024, 1, 1), date(2024, 1, 31)));
        assert_eq!(january.len(), 2);

        let food_over_10 = tracker.filter(
            &ExpenseFilter::between(date(2024, 1, 1), date(2024, 12, 31))
                .with_categories(["Food"])
                .with_min_amount(Money::from_cents(1000)),
        );
        assert_eq!(food_over_10.len(), 1);
        assert_eq!(food_over_10[0].description, "c");

        assert_eq!(tracker.date_range(), Some((date(2024, 1, 1), date(2024, 2, 1))));
        assert_eq!(tracker.max_amount(), Money::from_cents(2500));
    }

    #[test]
    fn test_stored_date_is_iso() {
        let (_temp_dir, storage) = create_test_storage();
        let mut tracker = ExpenseTracker::new(&storage, "alice").unwrap();
        tracker.add_expense(food(100)).unwrap();

        let content = std::fs::read_to_string(storage.paths().expenses_file()).unwrap();
        assert!(content.contains("alice,2024-01-10,Food,1.00,meal"));
    }
}
