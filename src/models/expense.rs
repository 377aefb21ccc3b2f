//! Expense record model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::Category;
use super::money::Money;

/// A single expense entry
///
/// Serialized with exactly four fields: `date` (`YYYY-MM-DD`), `amount`
/// (number), `description` and `category` (label).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    pub date: NaiveDate,
    pub amount: Money,
    pub description: String,
    pub category: Category,
}

impl Expense {
    /// Largest amount a single expense may hold (999,999,999.99)
    ///
    /// Keeps report totals inside the i64 cent range for any store of fewer
    /// than ninety million records.
    pub const MAX_AMOUNT: Money = Money::from_cents(99_999_999_999);

    /// Create a new expense
    pub fn new(
        date: NaiveDate,
        amount: Money,
        description: impl Into<String>,
        category: Category,
    ) -> Self {
        Self {
            date,
            amount,
            description: description.into(),
            category,
        }
    }

    /// Validate the expense
    ///
    /// Dates and categories are valid by construction; only the amount can
    /// break an invariant.
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if self.amount.is_negative() {
            return Err(ExpenseValidationError::NegativeAmount(self.amount));
        }
        if self.amount > Self::MAX_AMOUNT {
            return Err(ExpenseValidationError::AmountTooLarge(self.amount));
        }
        Ok(())
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {} - {} - {}",
            self.date.format("%Y-%m-%d"),
            self.category,
            self.amount,
            self.description
        )
    }
}

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    NegativeAmount(Money),
    AmountTooLarge(Money),
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeAmount(amount) => {
                write!(f, "Amount cannot be negative (got {})", amount)
            }
            Self::AmountTooLarge(amount) => write!(
                f,
                "Amount cannot exceed {} (got {})",
                Expense::MAX_AMOUNT,
                amount
            ),
        }
    }
}

impl std::error::Error for ExpenseValidationError {}
