//! Storage layer for FinFlow
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation.

pub mod budgets;
pub mod file_io;
pub mod transactions;

pub use budgets::BudgetRepository;
pub use file_io::{read_json, read_json_lenient, write_json_atomic};
pub use transactions::TransactionRepository;

use crate::config::paths::FinflowPaths;
use crate::error::FinflowError;

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: FinflowPaths,
    pub transactions: TransactionRepository,
    pub budgets: BudgetRepository,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: FinflowPaths) -> Result<Self, FinflowError> {
        paths.ensure_directories()?;

        Ok(Self {
            transactions: TransactionRepository::new(paths.transactions_file()),
            budgets: BudgetRepository::new(paths.budgets_file()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &FinflowPaths {
        &self.paths
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> Result<(), FinflowError> {
        self.transactions.load()?;
        self.budgets.load()?;
        Ok(())
    }

    /// Save all data to disk
    pub fn save_all(&self) -> Result<(), FinflowError> {
        self.transactions.save()?;
        self.budgets.save()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Money};
    use tempfile::TempDir;

    #[test]
    fn test_storage_creation() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinflowPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();

        assert!(temp_dir.path().join("data").exists());
        assert_eq!(storage.transactions.count().unwrap(), 0);
        assert_eq!(storage.budgets.count().unwrap(), 0);
    }

    #[test]
    fn test_save_all_writes_both_files() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinflowPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths.clone()).unwrap();

        storage
            .budgets
            .set_amount(Category::Travel, Money::from_cents(100))
            .unwrap();
        storage.save_all().unwrap();

        assert!(paths.transactions_file().exists());
        assert!(paths.budgets_file().exists());
    }
}
