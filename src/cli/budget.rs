//! Budget CLI commands
//!
//! Implements CLI commands for setting, removing and reviewing per-category
//! monthly budgets.

use chrono::NaiveDate;
use clap::Subcommand;

use crate::config::Settings;
use crate::error::FinflowResult;
use crate::models::Category;
use crate::reports::budget_progress::{budget_progress, format_progress_bars, format_progress_table};
use crate::services::BudgetService;
use crate::storage::Storage;

use super::parse_amount;

/// Width of the progress bars printed by `budget list --bars`
const BAR_WIDTH: usize = 30;

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Set the monthly budget for a category
    Set {
        /// Category name or slug
        category: String,
        /// Monthly ceiling (e.g., "400" or "400.00")
        amount: String,
    },

    /// Remove a category's budget
    Remove {
        /// Category name or slug
        category: String,
    },

    /// Show every budget with spending for the current month
    List {
        /// Draw progress bars instead of a table
        #[arg(short, long)]
        bars: bool,
    },

    /// Recompute spending for all budgets
    Refresh,
}

/// Handle a budget command
pub fn handle_budget_command(
    storage: &Storage,
    settings: &Settings,
    reference_date: NaiveDate,
    cmd: BudgetCommands,
) -> FinflowResult<()> {
    let service = BudgetService::new(storage, reference_date);
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        BudgetCommands::Set { category, amount } => {
            let category: Category = category.parse()?;
            let amount = parse_amount(&amount)?;
            let budget = service.set(category, amount)?;

            println!(
                "Budget for {} set to {}",
                budget.category,
                budget.amount.format_with_symbol(symbol)
            );
            println!(
                "  Spent this month: {} ({:.1}%)",
                budget.spent.format_with_symbol(symbol),
                budget.percent_used()
            );
            println!("  Status: {}", budget.status(settings.warning_threshold));
        }

        BudgetCommands::Remove { category } => {
            let category: Category = category.parse()?;
            let removed = service.remove(category)?;
            println!("Removed budget for {}", removed.category);
        }

        BudgetCommands::List { bars } => {
            let budgets = service.list()?;
            if budgets.is_empty() {
                println!("No budgets set.");
                println!("Set one with: finflow budget set <category> <amount>");
                return Ok(());
            }

            let progress = budget_progress(&budgets, settings.warning_threshold);
            if bars {
                print!("{}", format_progress_bars(&progress, BAR_WIDTH));
            } else {
                println!("{}", format_progress_table(&progress, symbol));
            }
        }

        BudgetCommands::Refresh => {
            let outcome = service.reconcile()?;
            if outcome.changed {
                println!("Updated spending for {} budgets.", outcome.budgets.len());
            } else {
                println!("Budgets already up to date.");
            }
        }
    }

    Ok(())
}
