use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::warn;
use tracing_subscriber::EnvFilter;

use expense_tracker::cli::{
    handle_expense_command, handle_report_command, ExpenseCommands, ReportCommands,
};
use expense_tracker::config::{ExpensePaths, Settings};
use expense_tracker::display::format_category_menu;
use expense_tracker::storage::ExpenseStore;

#[derive(Parser)]
#[command(
    name = "expense",
    author = "Kaylee Beyene",
    version,
    about = "Track personal expenses and see where the money goes",
    long_about = "Record expenses by date, amount, description and category, \
                  then review monthly summaries and all-time category breakdowns \
                  from the command line."
)]
struct Cli {
    /// Expenses file to use instead of the configured one
    #[arg(long, global = true, env = "EXPENSE_TRACKER_FILE")]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Expense(ExpenseCommands),

    /// Monthly summaries and category analysis
    #[command(subcommand)]
    Report(ReportCommands),

    /// List the available categories
    Categories,

    /// Create the data directory and default settings
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let paths = ExpensePaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let expenses_file = cli
        .file
        .clone()
        .unwrap_or_else(|| settings.expenses_file(&paths));

    match cli.command {
        Some(Commands::Expense(cmd)) => {
            let mut store = open_store(expenses_file);
            handle_expense_command(&mut store, &settings, cmd)?;
        }
        Some(Commands::Report(cmd)) => {
            let store = open_store(expenses_file);
            handle_report_command(&store, &settings, cmd)?;
        }
        Some(Commands::Categories) => {
            print!("{}", format_category_menu());
        }
        Some(Commands::Init) => {
            println!("Initializing expense tracker at: {}", paths.base_dir().display());
            paths.ensure_directories()?;
            if !paths.settings_file().exists() {
                settings.save(&paths)?;
            }
            println!("Settings: {}", paths.settings_file().display());
            println!("Expenses: {}", expenses_file.display());
        }
        Some(Commands::Config) => {
            println!("Expense Tracker Configuration");
            println!("=============================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Expenses file:  {}", expenses_file.display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Chart width:     {}", settings.chart_width);
        }
        None => {
            println!("Expense Tracker - personal expense tracking");
            println!();
            println!("Run 'expense --help' for usage information.");
            println!("Run 'expense add 12.50 --category Food' to record an expense.");
        }
    }

    Ok(())
}

/// Load the store, falling back to an empty list if the file can't be read
fn open_store(path: PathBuf) -> ExpenseStore {
    let (store, load_error) = ExpenseStore::open_or_empty(path);

    if let Some(e) = load_error {
        warn!(error = %e, "expenses file could not be loaded");
        eprintln!("Warning: {}", e);
        eprintln!("Continuing with an empty expense list; saving will overwrite the file.");
    }

    store
}
