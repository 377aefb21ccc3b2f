//! CLI commands for reports
//!
//! Monthly summaries and all-time category analysis, printed as tables or
//! exported to CSV.

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_chart, format_summary};
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Money, YearMonth};
use crate::reports::{ReportScope, SpendingSummary};
use crate::storage::ExpenseStore;

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Summary of one month's expenses
    Monthly {
        /// Month (YYYY-MM), defaults to the current month
        month: Option<String>,

        /// Also draw a bar chart of the category breakdown
        #[arg(long)]
        chart: bool,

        /// Export the breakdown to a CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Spending by category across all expenses
    #[command(alias = "analysis")]
    Categories {
        /// Also draw a bar chart of the category breakdown
        #[arg(long)]
        chart: bool,

        /// Export the breakdown to a CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Handle report commands
pub fn handle_report_command(
    store: &ExpenseStore,
    settings: &Settings,
    cmd: ReportCommands,
) -> ExpenseResult<()> {
    match cmd {
        ReportCommands::Monthly {
            month,
            chart,
            output,
        } => {
            let month = match month {
                Some(m) => YearMonth::parse(&m)
                    .map_err(|e| ExpenseError::Validation(e.to_string()))?,
                None => YearMonth::current(),
            };
            handle_summary(store, settings, ReportScope::Month(month), chart, output)
        }
        ReportCommands::Categories { chart, output } => {
            handle_summary(store, settings, ReportScope::AllTime, chart, output)
        }
    }
}

fn handle_summary(
    store: &ExpenseStore,
    settings: &Settings,
    scope: ReportScope,
    chart: bool,
    output: Option<PathBuf>,
) -> ExpenseResult<()> {
    let summary = match SpendingSummary::generate(store.list(), scope) {
        Ok(summary) => summary,
        Err(ExpenseError::DivisionUndefined) => {
            let zero = Money::zero().format_with_symbol(&settings.currency_symbol);
            if let Some(path) = output {
                return Err(ExpenseError::Export(format!(
                    "Nothing written to {}: expenses for {} total {}, so there are no \
                     percentages to export",
                    path.display(),
                    scope,
                    zero
                )));
            }
            println!(
                "Expenses for {} total {}; there is no category breakdown to show.",
                scope, zero
            );
            return Ok(());
        }
        Err(e) => return Err(e),
    };

    if summary.is_empty() {
        match scope {
            ReportScope::Month(month) => println!("No expenses found for {}.", month),
            ReportScope::AllTime => println!("No expenses found."),
        }
        return Ok(());
    }

    if let Some(path) = output {
        let file = File::create(&path).map_err(|e| {
            ExpenseError::Export(format!("Failed to create file {}: {}", path.display(), e))
        })?;
        summary.export_csv(BufWriter::new(file))?;
        println!("Report exported to: {}", path.display());
        return Ok(());
    }

    print!("{}", format_summary(&summary, &settings.currency_symbol));

    if chart {
        println!();
        print!("{}", format_chart(&summary, settings.chart_width));
    }

    Ok(())
}
