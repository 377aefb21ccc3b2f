//! Expense categories
//!
//! The set of categories is fixed; adding one means adding a variant here.
//! Labels double as the on-disk representation.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Classification of an expense
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Category {
    Food,
    Transportation,
    Entertainment,
    Housing,
    Utilities,
    Shopping,
    Health,
    Education,
    Other,
}

impl Category {
    /// All categories in menu order
    pub fn all() -> &'static [Category] {
        &[
            Self::Food,
            Self::Transportation,
            Self::Entertainment,
            Self::Housing,
            Self::Utilities,
            Self::Shopping,
            Self::Health,
            Self::Education,
            Self::Other,
        ]
    }

    /// The label used for display and storage
    pub fn label(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Transportation => "Transportation",
            Self::Entertainment => "Entertainment",
            Self::Housing => "Housing",
            Self::Utilities => "Utilities",
            Self::Shopping => "Shopping",
            Self::Health => "Health",
            Self::Education => "Education",
            Self::Other => "Other",
        }
    }

    /// Look up a category by its 1-based menu number
    pub fn from_menu_number(number: usize) -> Option<Self> {
        number
            .checked_sub(1)
            .and_then(|i| Self::all().get(i))
            .copied()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = CategoryParseError;

    /// Accepts a label (case-insensitive) or a 1-based menu number
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        if let Ok(number) = s.parse::<usize>() {
            return Self::from_menu_number(number)
                .ok_or_else(|| CategoryParseError(s.to_string()));
        }

        Self::all()
            .iter()
            .find(|c| c.label().eq_ignore_ascii_case(s))
            .copied()
            .ok_or_else(|| CategoryParseError(s.to_string()))
    }
}

/// Error returned when a string names no known category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryParseError(String);

impl fmt::Display for CategoryParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let labels: Vec<_> = Category::all().iter().map(|c| c.label()).collect();
        write!(
            f,
            "Unknown category '{}'. Choose one of: {} (or its number 1-{})",
            self.0,
            labels.join(", "),
            labels.len()
        )
    }
}

impl std::error::Error for CategoryParseError {}
