//! Display formatting for terminal output
//!
//! Turns records and summaries into tables and charts. Nothing here touches
//! storage.

pub mod expense;
pub mod report;

pub use expense::{format_category_menu, format_expense_line, format_expense_list};
pub use report::{format_breakdown, format_chart, format_summary};
