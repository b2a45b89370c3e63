//! FinTrack - personal expense tracker with per-category budgets
//!
//! This library provides the core functionality for the FinTrack command
//! line application: user accounts, expense recording against categories,
//! per-category budget ceilings and spending reports. All state lives in
//! CSV tables keyed by username.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path resolution and user settings
//! - `error`: Custom error types
//! - `models`: Record types (users, categories, budgets, expenses) and `Money`
//! - `storage`: CSV table storage layer
//! - `crypto`: Password hashing and zeroizing password buffers
//! - `services`: Business logic, including the per-user `ExpenseTracker`
//! - `reports`: Spending aggregates and the dashboard
//! - `export`: CSV export
//! - `display`: Terminal table formatting
//! - `cli`: Command handlers for the `fintrack` binary
//!
//! # Example
//!
//! ```rust,ignore
//! use fintrack::config::paths::FinTrackPaths;
//! use fintrack::models::{Money, NewExpense};
//! use fintrack::services::ExpenseTracker;
//! use fintrack::storage::Storage;
//!
//! let storage = Storage::new(FinTrackPaths::new()?)?;
//! let mut tracker = ExpenseTracker::new(&storage, "alice")?;
//! tracker.set_budget("Food", Money::from_cents(10000))?;
//! tracker.add_expense(NewExpense::new(today, "Food", Money::from_cents(6000), "groceries"))?;
//! ```

pub mod cli;
pub mod config;
pub mod crypto;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{FinTrackError, FinTrackResult};
