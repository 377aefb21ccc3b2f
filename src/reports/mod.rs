//! Reports module for the expense tracker
//!
//! `aggregate` holds the stateless aggregation functions; `summary` packages
//! them into per-month and all-time spending summaries.

pub mod aggregate;
pub mod summary;

pub use aggregate::{
    category_breakdown, category_totals, filter_by_month, total_amount, CategoryShare,
};
pub use summary::{ReportScope, SpendingSummary};
