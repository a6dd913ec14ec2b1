use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use finflow::cli::{
    handle_budget_command, handle_report_command, handle_transaction_command, parse_date,
};
use finflow::config::{FinflowPaths, Settings};
use finflow::display::format_category_list;
use finflow::logging::init_tracing;
use finflow::services::reconcile_storage;
use finflow::storage::Storage;

#[derive(Parser)]
#[command(
    name = "finflow",
    version,
    about = "Personal finance tracker for the terminal",
    long_about = "FinFlow records income and expenses, keeps per-category monthly \
                  budgets in sync with what you spend, and summarizes spending \
                  by month and by category."
)]
struct Cli {
    /// Treat this date (YYYY-MM-DD) as today
    #[arg(long, global = true, value_name = "DATE")]
    as_of: Option<String>,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Transaction management commands
    #[command(subcommand, alias = "txn")]
    Transaction(finflow::cli::TransactionCommands),

    /// Budget management commands
    #[command(subcommand)]
    Budget(finflow::cli::BudgetCommands),

    /// Reports and summaries
    #[command(subcommand)]
    Report(finflow::cli::ReportCommands),

    /// List categories and their chart colors
    Categories,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let reference_date = match cli.as_of.as_deref() {
        Some(value) => parse_date(value)?,
        None => today(),
    };

    // Initialize paths and settings
    let paths = FinflowPaths::new()?;
    let settings = Settings::load_or_create(&paths).context("loading settings")?;

    // Initialize storage
    let mut storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    // Budgets always show spending for the month of the reference date
    reconcile_storage(&storage, reference_date)?;

    match cli.command {
        Some(Commands::Transaction(cmd)) => {
            handle_transaction_command(&storage, &settings, reference_date, cmd)?;
        }
        Some(Commands::Budget(cmd)) => {
            handle_budget_command(&storage, &settings, reference_date, cmd)?;
        }
        Some(Commands::Report(cmd)) => {
            handle_report_command(&storage, &settings, reference_date, cmd)?;
        }
        Some(Commands::Categories) => {
            print!("{}", format_category_list(&settings.palette()));
        }
        Some(Commands::Config) => {
            println!("FinFlow Configuration");
            println!("=====================");
            println!("Config file:       {}", paths.settings_file().display());
            println!("Transactions file: {}", paths.transactions_file().display());
            println!("Budgets file:      {}", paths.budgets_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:   {}", settings.currency_symbol);
            println!("  Date format:       {}", settings.date_format);
            println!("  Warning threshold: {}%", settings.warning_threshold);
            println!("  Recent limit:      {}", settings.recent_limit);
            println!("  Reference date:    {}", reference_date);
        }
        None => {
            println!("FinFlow - Personal finance tracker");
            println!();
            println!("Run 'finflow --help' for usage information.");
            println!("Run 'finflow report summary' for this month at a glance.");
        }
    }

    Ok(())
}

fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}
