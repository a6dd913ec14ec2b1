//! Transaction model
//!
//! Represents a single recorded income or expense event. Amounts are always
//! positive; the direction of money is carried by [`TransactionType`].

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::category::Category;
use super::ids::TransactionId;
use super::money::Money;

/// Whether a transaction brings money in or sends it out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    #[default]
    Expense,
}

impl TransactionType {
    /// Sign prefix used when listing transactions
    pub fn sign(&self) -> char {
        match self {
            Self::Income => '+',
            Self::Expense => '-',
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => f.pad("income"),
            Self::Expense => f.pad("expense"),
        }
    }
}

impl FromStr for TransactionType {
    type Err = TransactionValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" | "in" => Ok(Self::Income),
            "expense" | "out" => Ok(Self::Expense),
            other => Err(TransactionValidationError::UnknownType(other.to_string())),
        }
    }
}

/// A financial transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier
    pub id: TransactionId,

    /// Amount, always positive
    pub amount: Money,

    /// What the money was for
    pub description: String,

    /// Transaction date
    pub date: NaiveDate,

    /// Spending category
    pub category: Category,

    /// Income or expense
    #[serde(rename = "type")]
    pub kind: TransactionType,
}

impl Transaction {
    /// Create a new transaction with a freshly minted id
    pub fn new(
        kind: TransactionType,
        amount: Money,
        description: impl Into<String>,
        date: NaiveDate,
        category: Category,
    ) -> Self {
        Self {
            id: TransactionId::new(),
            amount,
            description: description.into().trim().to_string(),
            date,
            category,
            kind,
        }
    }

    /// Shorthand for an expense
    pub fn expense(
        amount: Money,
        description: impl Into<String>,
        date: NaiveDate,
        category: Category,
    ) -> Self {
        Self::new(TransactionType::Expense, amount, description, date, category)
    }

    /// Shorthand for an income
    pub fn income(
        amount: Money,
        description: impl Into<String>,
        date: NaiveDate,
        category: Category,
    ) -> Self {
        Self::new(TransactionType::Income, amount, description, date, category)
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionType::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionType::Expense
    }

    /// Check whether this transaction falls in the same calendar month as `date`
    pub fn in_month_of(&self, date: NaiveDate) -> bool {
        self.date.year() == date.year() && self.date.month() == date.month()
    }

    /// Validate the transaction
    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        if !self.amount.is_positive() {
            return Err(TransactionValidationError::NonPositiveAmount(self.amount));
        }

        if self.description.trim().is_empty() {
            return Err(TransactionValidationError::EmptyDescription);
        }

        Ok(())
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}{} ({})",
            self.date.format("%Y-%m-%d"),
            self.description,
            self.kind.sign(),
            self.amount,
            self.category
        )
    }
}

/// Validation errors for transactions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionValidationError {
    NonPositiveAmount(Money),
    EmptyDescription,
    UnknownType(String),
}

impl fmt::Display for TransactionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveAmount(amount) => {
                write!(f, "Transaction amount must be positive, got {}", amount)
            }
            Self::EmptyDescription => write!(f, "Transaction description cannot be empty"),
            Self::UnknownType(s) => {
                write!(f, "Unknown transaction type '{}'. Use income or expense", s)
            }
        }
    }
}

impl std::error::Error for TransactionValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_new_transaction() {
        let txn = Transaction::expense(
            Money::from_cents(5000),
            "  Groceries ",
            date(2024, 3, 5),
            Category::FoodDining,
        );

        assert!(txn.is_expense());
        assert!(!txn.is_income());
        assert_eq!(txn.description, "Groceries");
        assert!(txn.validate().is_ok());
    }

    #[test]
    fn test_ids_are_unique() {
        let a = Transaction::income(Money::from_cents(1), "a", date(2024, 1, 1), Category::Other);
        let b = Transaction::income(Money::from_cents(1), "a", date(2024, 1, 1), Category::Other);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_validation() {
        let mut txn = Transaction::expense(
            Money::zero(),
            "Coffee",
            date(2024, 3, 5),
            Category::FoodDining,
        );
        assert_eq!(
            txn.validate(),
            Err(TransactionValidationError::NonPositiveAmount(Money::zero()))
        );

        txn.amount = Money::from_cents(-100);
        assert!(txn.validate().is_err());

        txn.amount = Money::from_cents(350);
        txn.description = "   ".into();
        assert_eq!(
            txn.validate(),
            Err(TransactionValidationError::EmptyDescription)
        );
    }

    #[test]
    fn test_in_month_of() {
        let txn = Transaction::expense(
            Money::from_cents(100),
            "Bus",
            date(2024, 3, 31),
            Category::Transportation,
        );
        assert!(txn.in_month_of(date(2024, 3, 1)));
        assert!(!txn.in_month_of(date(2024, 4, 1)));
        assert!(!txn.in_month_of(date(2023, 3, 15)));
    }

    #[test]
    fn test_type_parse() {
        assert_eq!("Income".parse::<TransactionType>().unwrap(), TransactionType::Income);
        assert_eq!("expense".parse::<TransactionType>().unwrap(), TransactionType::Expense);
        assert!("transfer".parse::<TransactionType>().is_err());
    }

    #[test]
    fn test_serialization() {
        let txn = Transaction::expense(
            Money::from_cents(5000),
            "Groceries",
            date(2024, 3, 5),
            Category::FoodDining,
        );
        let json = serde_json::to_value(&txn).unwrap();
        assert_eq!(json["type"], "expense");
        assert_eq!(json["category"], "Food & Dining");
        assert_eq!(json["date"], "2024-03-05");
        assert_eq!(json["amount"], 5000);

        let back: Transaction = serde_json::from_value(json).unwrap();
        assert_eq!(back, txn);
    }
}
