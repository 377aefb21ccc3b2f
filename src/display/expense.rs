//! Expense display formatting
//!
//! Renders the expense list as a numbered table; the numbers are the 1-based
//! positions that `edit` and `delete` take.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use crate::models::{Category, Expense};

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Category")]
    category: Category,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Description")]
    description: String,
}

/// Format all expenses as a table
pub fn format_expense_list(expenses: &[Expense], currency_symbol: &str) -> String {
    if expenses.is_empty() {
        return "No expenses found.\n".to_string();
    }

    let rows = expenses.iter().enumerate().map(|(i, e)| ExpenseRow {
        index: i + 1,
        date: e.date.format("%Y-%m-%d").to_string(),
        category: e.category,
        amount: e.amount.format_with_symbol(currency_symbol),
        description: e.description.clone(),
    });

    let mut table = Table::new(rows);
    table
        .with(Style::modern())
        .with(Modify::new(Columns::single(3)).with(Alignment::right()));

    format!("{}\n", table)
}

/// Format a single expense on one line, prefixed with its position
pub fn format_expense_line(index: usize, expense: &Expense, currency_symbol: &str) -> String {
    format!(
        "#{} {} - {} - {} - {}",
        index,
        expense.date.format("%Y-%m-%d"),
        expense.category,
        expense.amount.format_with_symbol(currency_symbol),
        expense.description
    )
}

/// Numbered category menu
pub fn format_category_menu() -> String {
    Category::all()
        .iter()
        .enumerate()
        .map(|(i, c)| format!("{:>2}. {}\n", i + 1, c))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use chrono::NaiveDate;

    fn lunch() -> Expense {
        Expense::new(
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            Money::from_cents(2000),
            "lunch",
            Category::Food,
        )
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(format_expense_list(&[], "$"), "No expenses found.\n");
    }

    #[test]
    fn test_list_contains_fields() {
        let output = format_expense_list(&[lunch()], "$");

        assert!(output.contains("Description"));
        assert!(output.contains("2024-01-15"));
        assert!(output.contains("Food"));
        assert!(output.contains("$20.00"));
        assert!(output.contains("lunch"));
    }

    #[test]
    fn test_expense_line() {
        assert_eq!(
            format_expense_line(2, &lunch(), "€"),
            "#2 2024-01-15 - Food - €20.00 - lunch"
        );
    }

    #[test]
    fn test_category_menu() {
        let menu = format_category_menu();
        assert!(menu.starts_with(" 1. Food\n"));
        assert!(menu.contains(" 9. Other\n"));
    }
}
