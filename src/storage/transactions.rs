//! Transaction repository for JSON storage
//!
//! Manages loading and saving transactions to transactions.json. The store
//! keeps transactions in insertion order; edits replace an entry in place.

use std::path::PathBuf;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::FinflowError;
use crate::models::{Transaction, TransactionId};

use super::file_io::{read_json_lenient, write_json_atomic};

/// Serializable transaction data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct TransactionData {
    #[serde(default)]
    transactions: Vec<Transaction>,
}

/// Repository for transaction persistence
pub struct TransactionRepository {
    path: PathBuf,
    data: RwLock<Vec<Transaction>>,
}

impl TransactionRepository {
    /// Create a new, empty transaction repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(Vec::new()),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Vec<Transaction>>, FinflowError> {
        self.data
            .read()
            .map_err(|e| FinflowError::Storage(format!("Failed to acquire read lock: {}", e)))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<Transaction>>, FinflowError> {
        self.data
            .write()
            .map_err(|e| FinflowError::Storage(format!("Failed to acquire write lock: {}", e)))
    }

    /// Load transactions from disk; an unreadable file loads as empty
    pub fn load(&self) -> Result<(), FinflowError> {
        let file_data: TransactionData = read_json_lenient(&self.path);

        let mut data = self.write()?;
        *data = Vec::with_capacity(file_data.transactions.len());

        for txn in file_data.transactions {
            if data.iter().any(|t| t.id == txn.id) {
                tracing::warn!(id = %txn.id, "skipping duplicate transaction id in data file");
                continue;
            }
            data.push(txn);
        }

        tracing::debug!(count = data.len(), "loaded transactions");
        Ok(())
    }

    /// Save transactions to disk, in store order
    pub fn save(&self) -> Result<(), FinflowError> {
        let data = self.read()?;
        let file_data = TransactionData {
            transactions: data.clone(),
        };
        write_json_atomic(&self.path, &file_data)
    }

    /// Get a transaction by ID
    pub fn get(&self, id: TransactionId) -> Result<Option<Transaction>, FinflowError> {
        let data = self.read()?;
        Ok(data.iter().find(|t| t.id == id).cloned())
    }

    /// Get all transactions in store order
    pub fn get_all(&self) -> Result<Vec<Transaction>, FinflowError> {
        Ok(self.read()?.clone())
    }

    /// Find a transaction by full id, display id (`txn-1234abcd`) or unique prefix
    ///
    /// An ambiguous prefix is reported as a validation error rather than
    /// silently picking one of the matches.
    pub fn find(&self, identifier: &str) -> Result<Option<Transaction>, FinflowError> {
        if let Ok(id) = identifier.parse::<TransactionId>() {
            return self.get(id);
        }

        let data = self.read()?;
        let mut matches = data.iter().filter(|t| t.id.matches_prefix(identifier));
        let first = matches.next().cloned();
        if first.is_some() && matches.next().is_some() {
            return Err(FinflowError::Validation(format!(
                "Transaction id '{}' is ambiguous; use more characters",
                identifier
            )));
        }
        Ok(first)
    }

    /// Append a new transaction
    pub fn insert(&self, txn: Transaction) -> Result<(), FinflowError> {
        let mut data = self.write()?;
        if data.iter().any(|t| t.id == txn.id) {
            return Err(FinflowError::Duplicate {
                entity_type: "Transaction",
                identifier: txn.id.to_string(),
            });
        }
        data.push(txn);
        Ok(())
    }

    /// Replace the transaction with the same id, keeping its position
    pub fn update(&self, txn: Transaction) -> Result<(), FinflowError> {
        let mut data = self.write()?;
        let slot = data
            .iter_mut()
            .find(|t| t.id == txn.id)
            .ok_or_else(|| FinflowError::transaction_not_found(txn.id.to_string()))?;
        *slot = txn;
        Ok(())
    }

    /// Remove a transaction by id, returning it
    pub fn remove(&self, id: TransactionId) -> Result<Transaction, FinflowError> {
        let mut data = self.write()?;
        let index = data
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| FinflowError::transaction_not_found(id.to_string()))?;
        Ok(data.remove(index))
    }

    /// Count transactions
    pub fn count(&self) -> Result<usize, FinflowError> {
        Ok(self.read()?.len())
    }
}
