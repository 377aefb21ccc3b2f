//! Core data models for the expense tracker
//!
//! This module contains the expense record and the value types it is built
//! from: money amounts, categories and report months.

pub mod category;
pub mod expense;
pub mod money;
pub mod month;

pub use category::{Category, CategoryParseError};
pub use expense::{Expense, ExpenseValidationError};
pub use money::{Money, MoneyParseError};
pub use month::{MonthParseError, YearMonth};
