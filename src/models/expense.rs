//! Expense model
//!
//! An expense is a dated, categorized, described amount belonging to one
//! user. Dates carry no time component and are stored as ISO `YYYY-MM-DD`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use super::money::Money;

/// A stored expense row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Owner of the expense
    pub username: String,

    /// Calendar date of the expense
    pub date: NaiveDate,

    /// Category name
    pub category: String,

    /// Amount spent (non-negative)
    pub amount: Money,

    /// Free-form description
    #[serde(default)]
    pub description: String,
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} on {} ({}): {}",
            self.amount, self.date, self.category, self.description
        )
    }
}

/// Input for recording an expense; the owner comes from the tracker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewExpense {
    pub date: NaiveDate,
    pub category: String,
    pub amount: Money,
    pub description: String,
}

impl NewExpense {
    pub fn new(
        date: NaiveDate,
        category: impl Into<String>,
        amount: Money,
        description: impl Into<String>,
    ) -> Self {
        Self {
            date,
            category: category.into(),
            amount,
            description: description.into(),
        }
    }

    /// Attach the owner, producing the row that gets stored
    pub fn into_expense(self, username: impl Into<String>) -> Expense {
        Expense {
            username: username.into(),
            date: self.date,
            category: self.category,
            amount: self.amount,
            description: self.description,
        }
    }
}

/// Criteria for selecting expenses
///
/// The date window is inclusive on both ends. An empty category set means
/// "all categories"; each amount bound is independently optional and
/// inclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseFilter {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub categories: BTreeSet<String>,
    pub min_amount: Option<Money>,
    pub max_amount: Option<Money>,
}

impl ExpenseFilter {
    /// Filter on a date window only
    pub fn between(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start,
            end,
            categories: BTreeSet::new(),
            min_amount: None,
            max_amount: None,
        }
    }

    /// Restrict to the given categories
    pub fn with_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories = categories.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_min_amount(mut self, min: Money) -> Self {
        self.min_amount = Some(min);
        self
    }

    pub fn with_max_amount(mut self, max: Money) -> Self {
        self.max_amount = Some(max);
        self
    }

    /// Check whether an expense satisfies every criterion
    pub fn matches(&self, expense: &Expense) -> bool {
        if expense.date < self.start || expense.date > self.end {
            return false;
        }

        if !self.categories.is_empty() && !self.categories.contains(&expense.category) {
            return false;
        }

        if let Some(min) = self.min_amount {
            if expense.amount < min {
                return false;
            }
        }

        if let Some(max) = self.max_amount {
            if expense.amount > max {
                return false;
            }
        }

        true
    }
}
