//! Transaction display formatting
//!
//! Provides utilities for formatting transactions for terminal display.

use crate::models::Transaction;

/// Format a single transaction as a register row
pub fn format_transaction_row(txn: &Transaction, currency_symbol: &str) -> String {
    format!(
        "{:12} {} {:24} {:18} {:>14}",
        txn.id.to_string(),
        txn.date.format("%Y-%m-%d"),
        truncate(&txn.description, 24),
        txn.category.name(),
        format!(
            "{}{}",
            txn.kind.sign(),
            txn.amount.format_with_symbol(currency_symbol)
        )
    )
}

/// Format a list of transactions as a register
pub fn format_transaction_register(transactions: &[Transaction], currency_symbol: &str) -> String {
    if transactions.is_empty() {
        return "No transactions yet.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:12} {:10} {:24} {:18} {:>14}\n",
        "ID", "Date", "Description", "Category", "Amount"
    ));
    output.push_str(&"-".repeat(82));
    output.push('\n');

    for txn in transactions {
        output.push_str(&format_transaction_row(txn, currency_symbol));
        output.push('\n');
    }

    output
}

/// Format transaction details for display
pub fn format_transaction_details(txn: &Transaction, currency_symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Transaction: {}\n", txn.id));
    output.push_str(&format!("Full ID:     {}\n", txn.id.as_uuid()));
    output.push_str(&format!("Date:        {}\n", txn.date.format("%Y-%m-%d")));
    output.push_str(&format!("Type:        {}\n", txn.kind));
    output.push_str(&format!(
        "Amount:      {}\n",
        txn.amount.format_with_symbol(currency_symbol)
    ));
    output.push_str(&format!("Description: {}\n", txn.description));
    output.push_str(&format!("Category:    {}\n", txn.category));

    output
}

/// Truncate a string to a maximum number of characters
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let head: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Money};
    use chrono::NaiveDate;

    fn sample() -> Transaction {
        Transaction::expense(
            Money::from_cents(5000),
            "Groceries",
            NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
            Category::FoodDining,
        )
    }

    #[test]
    fn test_format_row() {
        let row = format_transaction_row(&sample(), "$");
        assert!(row.contains("2024-03-05"));
        assert!(row.contains("Groceries"));
        assert!(row.contains("Food & Dining"));
        assert!(row.contains("-$50.00"));
    }

    #[test]
    fn test_format_register_empty() {
        assert_eq!(format_transaction_register(&[], "$"), "No transactions yet.\n");
    }

    #[test]
    fn test_format_details() {
        let txn = sample();
        let details = format_transaction_details(&txn, "€");
        assert!(details.contains(&txn.id.as_uuid().to_string()));
        assert!(details.contains("Type:        expense"));
        assert!(details.contains("€50.00"));
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a very long description", 10), "a very ...");
    }
}
