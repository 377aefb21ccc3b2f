//! Expense CLI commands
//!
//! Implements add, list, edit and delete on top of the expense store.

use chrono::NaiveDate;
use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_expense_line, format_expense_list};
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Category, Expense, Money};
use crate::storage::ExpenseStore;

/// Expense subcommands
#[derive(Subcommand, Debug)]
pub enum ExpenseCommands {
    /// Add a new expense
    Add {
        /// Amount spent (e.g., "12.50")
        #[arg(allow_negative_numbers = true)]
        amount: String,
        /// Category name or number (see `expense categories`)
        #[arg(short, long)]
        category: String,
        /// Description
        #[arg(short, long, default_value = "")]
        description: String,
        /// Expense date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<String>,
    },
    /// List all expenses
    #[command(alias = "ls")]
    List,
    /// Edit an expense; omitted fields keep their current value
    Edit {
        /// Expense number as shown by `list`
        index: usize,
        /// New amount
        #[arg(short, long, allow_negative_numbers = true)]
        amount: Option<String>,
        /// New category name or number; 0 keeps the current one
        #[arg(short, long)]
        category: Option<String>,
        /// New description
        #[arg(short, long)]
        description: Option<String>,
        /// New date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,
    },
    /// Delete an expense
    #[command(alias = "rm")]
    Delete {
        /// Expense number as shown by `list`
        index: usize,
        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },
}

/// Handle an expense command
pub fn handle_expense_command(
    store: &mut ExpenseStore,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> ExpenseResult<()> {
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        ExpenseCommands::Add {
            amount,
            category,
            description,
            date,
        } => {
            let date = match date {
                Some(d) => parse_date(&d)?,
                None => chrono::Local::now().date_naive(),
            };
            let expense = Expense::new(
                date,
                parse_amount(&amount)?,
                description,
                parse_category(&category)?,
            );

            let index = store.append(expense)?;
            let added = store.get(index)?;
            println!("Added expense {}", format_expense_line(index, added, symbol));
        }

        ExpenseCommands::List => {
            print!("{}", format_expense_list(store.list(), symbol));
        }

        ExpenseCommands::Edit {
            index,
            amount,
            category,
            description,
            date,
        } => {
            let current = store.get(index)?.clone();
            let category = category.filter(|c| c.trim() != "0");

            if amount.is_none() && category.is_none() && description.is_none() && date.is_none() {
                println!("Nothing to change for {}", format_expense_line(index, &current, symbol));
                return Ok(());
            }

            let updated = Expense {
                date: date.as_deref().map(parse_date).transpose()?.unwrap_or(current.date),
                amount: amount
                    .as_deref()
                    .map(parse_amount)
                    .transpose()?
                    .unwrap_or(current.amount),
                description: description.unwrap_or(current.description),
                category: category
                    .as_deref()
                    .map(parse_category)
                    .transpose()?
                    .unwrap_or(current.category),
            };

            store.update(index, updated)?;
            let edited = store.get(index)?;
            println!("Updated expense {}", format_expense_line(index, edited, symbol));
        }

        ExpenseCommands::Delete { index, force } => {
            let expense = store.get(index)?;

            if !force {
                println!("About to delete expense:");
                println!("  {}", format_expense_line(index, expense, symbol));
                println!();
                println!("Use --force to confirm deletion");
                return Ok(());
            }

            let removed = store.delete(index)?;
            println!("Deleted expense {}", format_expense_line(index, &removed, symbol));
        }
    }

    Ok(())
}

/// Parse a user-supplied amount
pub fn parse_amount(s: &str) -> ExpenseResult<Money> {
    Money::parse(s).map_err(|e| ExpenseError::Validation(e.to_string()))
}

/// Parse a user-supplied YYYY-MM-DD date
pub fn parse_date(s: &str) -> ExpenseResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| {
        ExpenseError::Validation(format!("Invalid date format: {}. Use YYYY-MM-DD", s))
    })
}

/// Parse a category name or menu number
pub fn parse_category(s: &str) -> ExpenseResult<Category> {
    s.parse::<Category>()
        .map_err(|e| ExpenseError::Validation(e.to_string()))
}
