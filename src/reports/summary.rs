//! Spending summaries
//!
//! Bundles the totals and category breakdown for either one month or every
//! recorded expense.

use std::fmt;
use std::io::Write;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Expense, Money, YearMonth};

use super::aggregate::{category_breakdown, filter_by_month, total_amount, CategoryShare};

/// Which expenses a summary covers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportScope {
    Month(YearMonth),
    AllTime,
}

impl fmt::Display for ReportScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Month(month) => write!(f, "{}", month),
            Self::AllTime => write!(f, "All Time"),
        }
    }
}

/// Spending summary for a scope
#[derive(Debug, Clone)]
pub struct SpendingSummary {
    pub scope: ReportScope,
    /// Total spending in scope
    pub total: Money,
    /// Number of expenses in scope
    pub expense_count: usize,
    /// Category rows, largest first
    pub breakdown: Vec<CategoryShare>,
}

impl SpendingSummary {
    /// Summarize the expenses from `records` that fall within `scope`
    pub fn generate(records: &[Expense], scope: ReportScope) -> ExpenseResult<Self> {
        match scope {
            ReportScope::Month(month) => Self::build(&filter_by_month(records, month), scope),
            ReportScope::AllTime => Self::build(records, scope),
        }
    }

    /// Summary for a single month
    pub fn monthly(records: &[Expense], month: YearMonth) -> ExpenseResult<Self> {
        Self::generate(records, ReportScope::Month(month))
    }

    /// Summary over every record
    pub fn all_time(records: &[Expense]) -> ExpenseResult<Self> {
        Self::generate(records, ReportScope::AllTime)
    }

    fn build(in_scope: &[Expense], scope: ReportScope) -> ExpenseResult<Self> {
        Ok(Self {
            scope,
            total: total_amount(in_scope),
            expense_count: in_scope.len(),
            breakdown: category_breakdown(in_scope)?,
        })
    }

    /// Check whether any expenses fell within scope
    pub fn is_empty(&self) -> bool {
        self.expense_count == 0
    }

    /// The category with the largest spending
    pub fn top_category(&self) -> Option<&CategoryShare> {
        self.breakdown.first()
    }

    /// Export the breakdown to CSV
    pub fn export_csv<W: Write>(&self, writer: W) -> ExpenseResult<()> {
        let export_err = |e: csv::Error| ExpenseError::Export(e.to_string());
        let mut out = csv::Writer::from_writer(writer);

        out.write_record(["Scope", "Category", "Amount", "Percentage"])
            .map_err(export_err)?;

        let scope = self.scope.to_string();
        for share in &self.breakdown {
            let amount = format!("{:.2}", share.amount.as_f64());
            let percentage = format!("{:.2}", share.percentage);
            out.write_record([
                scope.as_str(),
                share.category.label(),
                amount.as_str(),
                percentage.as_str(),
            ])
            .map_err(export_err)?;
        }

        let total = format!("{:.2}", self.total.as_f64());
        let total_percentage = if self.is_empty() { "" } else { "100.00" };
        out.write_record([scope.as_str(), "TOTAL", total.as_str(), total_percentage])
            .map_err(export_err)?;

        out.flush()
            .map_err(|e| ExpenseError::Export(e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;
    use chrono::NaiveDate;

    fn records() -> Vec<Expense> {
        let date = |m, d| NaiveDate::from_ymd_opt(2024, m, d).unwrap();
        vec![
            Expense::new(date(1, 15), Money::from_cents(2000), "lunch", Category::Food),
            Expense::new(date(1, 16), Money::from_cents(6000), "shoes", Category::Shopping),
            Expense::new(date(2, 1), Money::from_cents(1000), "bus", Category::Transportation),
        ]
    }

    #[test]
    fn test_monthly_summary() {
        let month = YearMonth::new(2024, 1).unwrap();
        let summary = SpendingSummary::monthly(&records(), month).unwrap();

        assert_eq!(summary.scope.to_string(), "2024-01");
        assert_eq!(summary.total, Money::from_cents(8000));
        assert_eq!(summary.expense_count, 2);
        assert_eq!(summary.top_category().unwrap().category, Category::Shopping);
    }

    #[test]
    fn test_all_time_summary() {
        let summary = SpendingSummary::all_time(&records()).unwrap();

        assert_eq!(summary.scope.to_string(), "All Time");
        assert_eq!(summary.total, Money::from_cents(9000));
        assert_eq!(summary.breakdown.len(), 3);
    }

    #[test]
    fn test_empty_month() {
        let month = YearMonth::new(2023, 12).unwrap();
        let summary = SpendingSummary::monthly(&records(), month).unwrap();

        assert!(summary.is_empty());
        assert!(summary.breakdown.is_empty());
        assert!(summary.top_category().is_none());
    }

    #[test]
    fn test_export_csv() {
        let month = YearMonth::new(2024, 1).unwrap();
        let summary = SpendingSummary::monthly(&records(), month).unwrap();

        let mut buffer = Vec::new();
        summary.export_csv(&mut buffer).unwrap();
        let output = String::from_utf8(buffer).unwrap();

        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines[0], "Scope,Category,Amount,Percentage");
        assert_eq!(lines[1], "2024-01,Shopping,60.00,75.00");
        assert_eq!(lines[2], "2024-01,Food,20.00,25.00");
        assert_eq!(lines[3], "2024-01,TOTAL,80.00,100.00");
    }
}
