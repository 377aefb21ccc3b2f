//! Report formatting utilities for terminal output

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use crate::reports::{CategoryShare, ReportScope, SpendingSummary};

#[derive(Tabled)]
struct BreakdownRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Percentage")]
    percentage: String,
}

/// Format a spending summary: header, totals and the category table
pub fn format_summary(summary: &SpendingSummary, currency_symbol: &str) -> String {
    let mut output = String::new();

    let title = match summary.scope {
        ReportScope::Month(month) => format!("Monthly Summary for {}", month),
        ReportScope::AllTime => "Category Analysis (All Time)".to_string(),
    };
    output.push_str(&format!("=== {} ===\n", title));
    output.push_str(&format!(
        "Total expenses: {}\n",
        summary.total.format_with_symbol(currency_symbol)
    ));
    if let ReportScope::Month(_) = summary.scope {
        output.push_str(&format!(
            "Number of transactions: {}\n",
            summary.expense_count
        ));
    }
    output.push('\n');
    output.push_str(&format_breakdown(&summary.breakdown, currency_symbol));

    output
}

/// Format breakdown rows as a table
pub fn format_breakdown(breakdown: &[CategoryShare], currency_symbol: &str) -> String {
    let rows = breakdown.iter().map(|share| BreakdownRow {
        category: share.category.to_string(),
        amount: share.amount.format_with_symbol(currency_symbol),
        percentage: format!("{:.2}%", share.percentage),
    });

    let mut table = Table::new(rows);
    table
        .with(Style::modern())
        .with(Modify::new(Columns::new(1..)).with(Alignment::right()));

    format!("{}\n", table)
}

/// Horizontal bar chart of category shares
pub fn format_chart(summary: &SpendingSummary, width: usize) -> String {
    let mut output = format!("Expenses by Category for {}\n", summary.scope);

    let label_width = summary
        .breakdown
        .iter()
        .map(|s| s.category.label().len())
        .max()
        .unwrap_or(0);

    for share in &summary.breakdown {
        output.push_str(&format!(
            "{:<label_width$} {} {:>6}\n",
            share.category.label(),
            format_bar(share.percentage, 100.0, width),
            format_percentage(share.percentage),
            label_width = label_width
        ));
    }

    output
}

/// Format a percentage with appropriate precision
pub fn format_percentage(pct: f64) -> String {
    if pct < 0.1 && pct > 0.0 {
        format!("{:.2}%", pct)
    } else {
        format!("{:.1}%", pct)
    }
}

/// Create a simple bar representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return "░".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
