//! CLI commands for reports

use chrono::NaiveDate;
use clap::Subcommand;

use crate::config::Settings;
use crate::display::transaction::format_transaction_register;
use crate::error::FinflowResult;
use crate::reports::{MonthlySummary, SpendingReport, SpendingScope};
use crate::services::TransactionService;
use crate::storage::Storage;

/// Number of recent transactions shown under the summary
const SUMMARY_RECENT: usize = 5;

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Income, expenses and budget totals for the current month
    Summary,

    /// Expenses per month for the most recent months with spending
    Monthly,

    /// Expenses grouped by category, largest first
    Categories {
        /// Include every transaction, not just the current month
        #[arg(long)]
        all_time: bool,
    },
}

/// Handle a report command
pub fn handle_report_command(
    storage: &Storage,
    settings: &Settings,
    reference_date: NaiveDate,
    cmd: ReportCommands,
) -> FinflowResult<()> {
    let symbol = settings.currency_symbol.as_str();
    let transactions = storage.transactions.get_all()?;

    match cmd {
        ReportCommands::Summary => {
            let budgets = storage.budgets.get_all()?;
            let summary = MonthlySummary::generate(&transactions, &budgets, reference_date);
            print!("{}", summary.format_terminal(symbol));

            let recent = TransactionService::new(storage, reference_date).recent(SUMMARY_RECENT)?;
            if !recent.is_empty() {
                println!("\nRecent Transactions");
                print!("{}", format_transaction_register(&recent, symbol));
            }
        }

        ReportCommands::Monthly => {
            let report = SpendingReport::generate(
                &transactions,
                &settings.palette(),
                SpendingScope::CurrentMonth(reference_date),
            );
            print!("{}", report.format_monthly(symbol));
        }

        ReportCommands::Categories { all_time } => {
            let scope = if all_time {
                SpendingScope::AllTime
            } else {
                SpendingScope::CurrentMonth(reference_date)
            };
            let report = SpendingReport::generate(&transactions, &settings.palette(), scope);
            print!("{}", report.format_categories(symbol));
        }
    }

    Ok(())
}
