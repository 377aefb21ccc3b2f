//! Expense Tracker - personal expense tracking with monthly and category reports
//!
//! This library provides the core of the `expense` command-line tool: a
//! file-backed list of expenses and the aggregations used to report on it.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (expenses, money, categories, months)
//! - `storage`: JSON file storage for the expense list
//! - `reports`: Aggregations and spending summaries
//! - `display`: Terminal formatting (tables and charts)
//! - `cli`: Command handlers used by the binary
//!
//! A store is a plain value owned by its caller. It is meant for one process
//! at a time; concurrent writers to the same file overwrite each other.
//!
//! # Example
//!
//! ```rust,no_run
//! use expense_tracker::models::{Category, Expense, Money, YearMonth};
//! use expense_tracker::reports::{category_breakdown, filter_by_month};
//! use expense_tracker::storage::ExpenseStore;
//!
//! # fn main() -> expense_tracker::ExpenseResult<()> {
//! let mut store = ExpenseStore::open("expenses.json".into())?;
//! let date = chrono::NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
//! store.append(Expense::new(date, Money::from_cents(2000), "lunch", Category::Food))?;
//!
//! let january = filter_by_month(store.list(), YearMonth::new(2024, 1).unwrap());
//! for share in category_breakdown(&january)? {
//!     println!("{} {} {:.1}%", share.category, share.amount, share.percentage);
//! }
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod reports;
pub mod storage;

pub use error::{ExpenseError, ExpenseResult};
