//! Transaction service
//!
//! Provides business logic for transaction management. Every mutation is
//! followed by saving the transaction list and reconciling budgets, so a
//! caller never observes budgets whose `spent` disagrees with the
//! transactions on disk.

use chrono::NaiveDate;

use crate::error::{FinflowError, FinflowResult};
use crate::models::{Category, Money, Transaction, TransactionId, TransactionType};
use crate::storage::Storage;

use super::reconciliation::{reconcile_storage, Reconciliation};

/// Service for transaction management
pub struct TransactionService<'a> {
    storage: &'a Storage,
    reference_date: NaiveDate,
}

/// Options for filtering transactions
#[derive(Debug, Clone, Default)]
pub struct TransactionFilter {
    /// Filter by income/expense
    pub kind: Option<TransactionType>,
    /// Filter by category
    pub category: Option<Category>,
    /// Keep only transactions in the month of this date
    pub month_of: Option<NaiveDate>,
    /// Maximum number of transactions to return
    pub limit: Option<usize>,
}

impl TransactionFilter {
    /// Create a new empty filter
    pub fn new() -> Self {
        Self::default()
    }

    pub fn kind(mut self, kind: TransactionType) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    /// Filter to the calendar month containing `date`
    pub fn month_of(mut self, date: NaiveDate) -> Self {
        self.month_of = Some(date);
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    fn matches(&self, txn: &Transaction) -> bool {
        self.kind.map_or(true, |k| txn.kind == k)
            && self.category.map_or(true, |c| txn.category == c)
            && self.month_of.map_or(true, |d| txn.in_month_of(d))
    }
}

/// Input for creating a new transaction
#[derive(Debug, Clone)]
pub struct CreateTransactionInput {
    pub kind: TransactionType,
    pub amount: Money,
    pub description: String,
    pub date: NaiveDate,
    pub category: Category,
}

/// Fields to change on an existing transaction; `None` leaves a field as is
#[derive(Debug, Clone, Default)]
pub struct UpdateTransactionInput {
    pub kind: Option<TransactionType>,
    pub amount: Option<Money>,
    pub description: Option<String>,
    pub date: Option<NaiveDate>,
    pub category: Option<Category>,
}

impl UpdateTransactionInput {
    pub fn is_empty(&self) -> bool {
        self.kind.is_none()
            && self.amount.is_none()
            && self.description.is_none()
            && self.date.is_none()
            && self.category.is_none()
    }
}

impl<'a> TransactionService<'a> {
    /// Create a new transaction service
    ///
    /// `reference_date` decides which month budgets are reconciled against.
    pub fn new(storage: &'a Storage, reference_date: NaiveDate) -> Self {
        Self {
            storage,
            reference_date,
        }
    }

    /// Create a new transaction
    pub fn create(&self, input: CreateTransactionInput) -> FinflowResult<Transaction> {
        let txn = Transaction::new(
            input.kind,
            input.amount,
            input.description,
            input.date,
            input.category,
        );
        txn.validate()?;

        self.storage.transactions.insert(txn.clone())?;
        self.commit()?;

        tracing::info!(id = %txn.id, kind = %txn.kind, amount = %txn.amount, "created transaction");
        Ok(txn)
    }

    /// Get a transaction by ID
    pub fn get(&self, id: TransactionId) -> FinflowResult<Option<Transaction>> {
        self.storage.transactions.get(id)
    }

    /// Find a transaction by full id, display id or unique prefix
    pub fn find(&self, identifier: &str) -> FinflowResult<Option<Transaction>> {
        self.storage.transactions.find(identifier)
    }

    /// List transactions matching the filter, newest first
    ///
    /// Transactions on the same date keep their reverse insertion order, so
    /// the most recently entered one comes first.
    pub fn list(&self, filter: TransactionFilter) -> FinflowResult<Vec<Transaction>> {
        let mut transactions: Vec<Transaction> = self
            .storage
            .transactions
            .get_all()?
            .into_iter()
            .rev()
            .filter(|t| filter.matches(t))
            .collect();

        transactions.sort_by(|a, b| b.date.cmp(&a.date));

        if let Some(limit) = filter.limit {
            transactions.truncate(limit);
        }

        Ok(transactions)
    }

    /// The most recent transactions, newest first
    pub fn recent(&self, limit: usize) -> FinflowResult<Vec<Transaction>> {
        self.list(TransactionFilter::new().limit(limit))
    }

    /// Update a transaction in place
    pub fn update(
        &self,
        id: TransactionId,
        input: UpdateTransactionInput,
    ) -> FinflowResult<Transaction> {
        let mut txn = self
            .storage
            .transactions
            .get(id)?
            .ok_or_else(|| FinflowError::transaction_not_found(id.to_string()))?;

        if input.is_empty() {
            return Ok(txn);
        }

        if let Some(kind) = input.kind {
            txn.kind = kind;
        }
        if let Some(amount) = input.amount {
            txn.amount = amount;
        }
        if let Some(description) = input.description {
            txn.description = description.trim().to_string();
        }
        if let Some(date) = input.date {
            txn.date = date;
        }
        if let Some(category) = input.category {
            txn.category = category;
        }

        txn.validate()?;

        self.storage.transactions.update(txn.clone())?;
        self.commit()?;

        tracing::info!(id = %txn.id, "updated transaction");
        Ok(txn)
    }

    /// Delete a transaction
    pub fn delete(&self, id: TransactionId) -> FinflowResult<Transaction> {
        let txn = self.storage.transactions.remove(id)?;
        self.commit()?;

        tracing::info!(id = %txn.id, "deleted transaction");
        Ok(txn)
    }

    /// Count transactions
    pub fn count(&self) -> FinflowResult<usize> {
        self.storage.transactions.count()
    }

    /// Persist transactions, then bring budgets in line with them
    fn commit(&self) -> FinflowResult<Reconciliation> {
        self.storage.transactions.save()?;
        reconcile_storage(self.storage, self.reference_date)
    }
}
