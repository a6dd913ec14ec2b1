//! Transaction CLI commands
//!
//! Implements CLI commands for transaction management.

use chrono::NaiveDate;
use clap::Subcommand;

use crate::config::Settings;
use crate::display::transaction::{format_transaction_details, format_transaction_register};
use crate::error::{FinflowError, FinflowResult};
use crate::models::{Category, TransactionType};
use crate::services::{
    CreateTransactionInput, TransactionFilter, TransactionService, UpdateTransactionInput,
};
use crate::storage::Storage;

use super::{parse_amount, parse_date, parse_month};

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Record a new transaction
    Add {
        /// Amount, always positive (e.g., "50.00")
        amount: String,
        /// What the money was for
        description: String,
        /// Category name or slug (e.g., "Food & Dining" or "food-dining")
        #[arg(short, long)]
        category: String,
        /// Record as income instead of an expense
        #[arg(short, long)]
        income: bool,
        /// Transaction date (YYYY-MM-DD), defaults to the reference date
        #[arg(short, long)]
        date: Option<String>,
    },
    /// List transactions, newest first
    List {
        /// Filter by type (income or expense)
        #[arg(short = 't', long = "type")]
        kind: Option<String>,
        /// Filter by category name or slug
        #[arg(short, long)]
        category: Option<String>,
        /// Filter by month (YYYY-MM)
        #[arg(short, long)]
        month: Option<String>,
        /// Number of transactions to show
        #[arg(short, long)]
        limit: Option<usize>,
        /// Show every matching transaction
        #[arg(long, conflicts_with = "limit")]
        all: bool,
    },
    /// Show transaction details
    Show {
        /// Transaction ID or unique prefix
        id: String,
    },
    /// Edit a transaction
    Edit {
        /// Transaction ID or unique prefix
        id: String,
        /// New amount
        #[arg(short, long)]
        amount: Option<String>,
        /// New description
        #[arg(long)]
        description: Option<String>,
        /// New category
        #[arg(short, long)]
        category: Option<String>,
        /// New date
        #[arg(short, long)]
        date: Option<String>,
        /// New type (income or expense)
        #[arg(short = 't', long = "type")]
        kind: Option<String>,
    },
    /// Delete a transaction
    Delete {
        /// Transaction ID or unique prefix
        id: String,
        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },
}

/// Handle a transaction command
pub fn handle_transaction_command(
    storage: &Storage,
    settings: &Settings,
    reference_date: NaiveDate,
    cmd: TransactionCommands,
) -> FinflowResult<()> {
    let service = TransactionService::new(storage, reference_date);
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        TransactionCommands::Add {
            amount,
            description,
            category,
            income,
            date,
        } => {
            let amount = parse_amount(&amount)?;
            let category: Category = category.parse()?;
            let date = match date {
                Some(d) => parse_date(&d)?,
                None => reference_date,
            };
            let kind = if income {
                TransactionType::Income
            } else {
                TransactionType::Expense
            };

            let txn = service.create(CreateTransactionInput {
                kind,
                amount,
                description,
                date,
                category,
            })?;

            println!("Created transaction:");
            println!("  ID:       {}", txn.id);
            println!("  Date:     {}", txn.date.format(&settings.date_format));
            println!("  Type:     {}", txn.kind);
            println!("  Amount:   {}", txn.amount.format_with_symbol(symbol));
            println!("  Category: {}", txn.category);
        }

        TransactionCommands::List {
            kind,
            category,
            month,
            limit,
            all,
        } => {
            let mut filter = TransactionFilter::new();

            if let Some(kind) = kind {
                filter = filter.kind(kind.parse()?);
            }
            if let Some(category) = category {
                filter = filter.category(category.parse()?);
            }
            if let Some(month) = month {
                filter = filter.month_of(parse_month(&month)?);
            }
            if !all {
                filter = filter.limit(limit.unwrap_or(settings.recent_limit));
            }

            let transactions = service.list(filter)?;
            print!("{}", format_transaction_register(&transactions, symbol));
            if !transactions.is_empty() {
                println!("\nShowing {} of {} transactions", transactions.len(), service.count()?);
            }
        }

        TransactionCommands::Show { id } => {
            let txn = service
                .find(&id)?
                .ok_or_else(|| FinflowError::transaction_not_found(&id))?;
            print!("{}", format_transaction_details(&txn, symbol));
        }

        TransactionCommands::Edit {
            id,
            amount,
            description,
            category,
            date,
            kind,
        } => {
            let txn = service
                .find(&id)?
                .ok_or_else(|| FinflowError::transaction_not_found(&id))?;

            let input = UpdateTransactionInput {
                kind: kind.map(|k| k.parse()).transpose()?,
                amount: amount.map(|a| parse_amount(&a)).transpose()?,
                description,
                date: date.map(|d| parse_date(&d)).transpose()?,
                category: category.map(|c| c.parse()).transpose()?,
            };

            if input.is_empty() {
                println!("Nothing to change.");
                println!("Pass any of --amount, --description, --category, --date, --type");
                return Ok(());
            }

            let updated = service.update(txn.id, input)?;
            println!("Updated transaction: {}", updated.id);
            println!("  Date:     {}", updated.date.format(&settings.date_format));
            println!("  Type:     {}", updated.kind);
            println!("  Amount:   {}", updated.amount.format_with_symbol(symbol));
            println!("  Category: {}", updated.category);
        }

        TransactionCommands::Delete { id, force } => {
            let txn = service
                .find(&id)?
                .ok_or_else(|| FinflowError::transaction_not_found(&id))?;

            if !force {
                println!("About to delete transaction:");
                print!("{}", format_transaction_details(&txn, symbol));
                println!();
                println!("Use --force to confirm deletion");
                return Ok(());
            }

            let deleted = service.delete(txn.id)?;
            println!(
                "Deleted transaction: {} ({} {})",
                deleted.id,
                deleted.date.format(&settings.date_format),
                deleted.description
            );
        }
    }

    Ok(())
}
