//! CSV Export functionality
//!
//! Writes expenses and budgets with the same columns the tables use, so an
//! exported expense file can be fed straight back into an import.

use std::io::Write;

use crate::error::{FinTrackError, FinTrackResult};
use crate::models::{Budget, Expense};
use crate::storage::{write_csv, TableRecord};

/// Write expenses to CSV, header first
///
/// Used both for a user's full ledger and for a filtered subset. An empty
/// slice still produces the header row.
pub fn export_expenses_csv<W: Write>(expenses: &[Expense], writer: &mut W) -> FinTrackResult<()> {
    write_csv(writer, Expense::COLUMNS, expenses)
        .map_err(|e| FinTrackError::Export(e.to_string()))
}

/// Write budgets to CSV, header first
pub fn export_budgets_csv<W: Write>(budgets: &[Budget], writer: &mut W) -> FinTrackResult<()> {
    write_csv(writer, Budget::COLUMNS, budgets).map_err(|e| FinTrackError::Export(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseFilter, Money, NewExpense};
    use crate::services::import::parse_expenses;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample() -> Vec<Expense> {
        vec![
            NewExpense::new(date(2024, 1, 5), "Food", Money::from_cents(1250), "lunch, tacos")
                .into_expense("alice"),
            NewExpense::new(date(2024, 2, 1), "Housing", Money::from_cents(90000), "rent")
                .into_expense("alice"),
        ]
    }

    #[test]
    fn test_export_expenses_csv() {
        let mut output = Vec::new();
        export_expenses_csv(&sample(), &mut output).unwrap();

        let csv = String::from_utf8(output).unwrap();
        let lines: Vec<_> = csv.lines().collect();
        assert_eq!(lines[0], "username,date,category,amount,description");
        assert_eq!(lines[1], "alice,2024-01-05,Food,12.50,\"lunch, tacos\"");
        assert_eq!(lines[2], "alice,2024-02-01,Housing,900.00,rent");
    }

    #[test]
    fn test_export_filtered_subset() {
        let filter = ExpenseFilter::between(date(2024, 2, 1), date(2024, 2, 29));
        let filtered: Vec<_> = sample().into_iter().filter(|e| filter.matches(e)).collect();

        let mut output = Vec::new();
        export_expenses_csv(&filtered, &mut output).unwrap();

        let csv = String::from_utf8(output).unwrap();
        assert_eq!(csv.lines().count(), 2);
        assert!(csv.contains("rent"));
        assert!(!csv.contains("tacos"));
    }

    #[test]
    fn test_export_empty_has_header() {
        let mut output = Vec::new();
        export_budgets_csv(&[], &mut output).unwrap();
        assert_eq!(String::from_utf8(output).unwrap(), "username,category,amount\n");
    }

    #[test]
    fn test_exported_expenses_reimport() {
        let mut output = Vec::new();
        export_expenses_csv(&sample(), &mut output).unwrap();

        let rows = parse_expenses(output.as_slice()).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].description, "lunch, tacos");
        assert_eq!(rows[1].amount, Money::from_cents(90000));
    }

    #[test]
    fn test_export_budgets_csv() {
        let budgets = vec![Budget::new("alice", "Food", Money::from_cents(10000))];

        let mut output = Vec::new();
        export_budgets_csv(&budgets, &mut output).unwrap();
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "username,category,amount\nalice,Food,100.00\n"
        );
    }
}
