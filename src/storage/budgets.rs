//! Budget repository for JSON storage
//!
//! Manages loading and saving budgets to budgets.json. At most one budget
//! exists per category; the list order is the order budgets were first set.

use std::path::PathBuf;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::FinflowError;
use crate::models::{Budget, Category, Money};

use super::file_io::{read_json_lenient, write_json_atomic};

/// Serializable budget data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct BudgetData {
    #[serde(default)]
    budgets: Vec<Budget>,
}

/// Repository for budget persistence
pub struct BudgetRepository {
    path: PathBuf,
    budgets: RwLock<Vec<Budget>>,
}

impl BudgetRepository {
    /// Create a new, empty budget repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            budgets: RwLock::new(Vec::new()),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Vec<Budget>>, FinflowError> {
        self.budgets
            .read()
            .map_err(|e| FinflowError::Storage(format!("Failed to acquire read lock: {}", e)))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<Budget>>, FinflowError> {
        self.budgets
            .write()
            .map_err(|e| FinflowError::Storage(format!("Failed to acquire write lock: {}", e)))
    }

    /// Load budgets from disk; an unreadable file loads as empty
    ///
    /// If the file lists a category twice, the first entry wins.
    pub fn load(&self) -> Result<(), FinflowError> {
        let file_data: BudgetData = read_json_lenient(&self.path);

        let mut budgets = self.write()?;
        budgets.clear();
        for budget in file_data.budgets {
            if budgets.iter().any(|b| b.category == budget.category) {
                tracing::warn!(
                    category = %budget.category,
                    "skipping duplicate budget in data file"
                );
                continue;
            }
            budgets.push(budget);
        }

        tracing::debug!(count = budgets.len(), "loaded budgets");
        Ok(())
    }

    /// Save budgets to disk, in store order
    pub fn save(&self) -> Result<(), FinflowError> {
        let budgets = self.read()?;
        let file_data = BudgetData {
            budgets: budgets.clone(),
        };
        write_json_atomic(&self.path, &file_data)
    }

    /// Get the budget for a category
    pub fn get(&self, category: Category) -> Result<Option<Budget>, FinflowError> {
        Ok(self.read()?.iter().find(|b| b.category == category).cloned())
    }

    /// Get all budgets in store order
    pub fn get_all(&self) -> Result<Vec<Budget>, FinflowError> {
        Ok(self.read()?.clone())
    }

    /// Set the ceiling for a category
    ///
    /// An existing budget keeps its position and its `spent` value; a new one
    /// is appended with nothing spent.
    pub fn set_amount(&self, category: Category, amount: Money) -> Result<Budget, FinflowError> {
        let mut budgets = self.write()?;
        if let Some(existing) = budgets.iter_mut().find(|b| b.category == category) {
            existing.amount = amount;
            return Ok(existing.clone());
        }
        let budget = Budget::new(category, amount);
        budgets.push(budget.clone());
        Ok(budget)
    }

    /// Remove the budget for a category, returning it
    pub fn remove(&self, category: Category) -> Result<Budget, FinflowError> {
        let mut budgets = self.write()?;
        let index = budgets
            .iter()
            .position(|b| b.category == category)
            .ok_or_else(|| FinflowError::budget_not_found(category.name()))?;
        Ok(budgets.remove(index))
    }

    /// Replace the whole list, e.g. with a reconciled copy
    ///
    /// Rejects lists that would break per-category uniqueness.
    pub fn replace_all(&self, new_budgets: Vec<Budget>) -> Result<(), FinflowError> {
        for (i, budget) in new_budgets.iter().enumerate() {
            if new_budgets[..i].iter().any(|b| b.category == budget.category) {
                return Err(FinflowError::Duplicate {
                    entity_type: "Budget",
                    identifier: budget.category.name().to_string(),
                });
            }
        }
        *self.write()? = new_budgets;
        Ok(())
    }

    /// Count budgets
    pub fn count(&self) -> Result<usize, FinflowError> {
        Ok(self.read()?.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, BudgetRepository) {
        let temp_dir = TempDir::new().unwrap();
        let repo = BudgetRepository::new(temp_dir.path().join("budgets.json"));
        (temp_dir, repo)
    }

    #[test]
    fn test_set_creates_then_updates() {
        let (_temp_dir, repo) = create_test_repo();

        repo.set_amount(Category::FoodDining, Money::from_cents(10000))
            .unwrap();
        repo.set_amount(Category::Travel, Money::from_cents(20000))
            .unwrap();

        let mut reconciled = repo.get_all().unwrap();
        reconciled[0].spent = Money::from_cents(5000);
        repo.replace_all(reconciled).unwrap();

        let updated = repo
            .set_amount(Category::FoodDining, Money::from_cents(15000))
            .unwrap();
        assert_eq!(updated.amount, Money::from_cents(15000));
        assert_eq!(updated.spent, Money::from_cents(5000));

        let all = repo.get_all().unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].category, Category::FoodDining);
        assert_eq!(all[1].category, Category::Travel);
    }

    #[test]
    fn test_remove() {
        let (_temp_dir, repo) = create_test_repo();
        repo.set_amount(Category::Travel, Money::from_cents(20000))
            .unwrap();

        let removed = repo.remove(Category::Travel).unwrap();
        assert_eq!(removed.category, Category::Travel);
        assert_eq!(repo.count().unwrap(), 0);
        assert!(repo.remove(Category::Travel).unwrap_err().is_not_found());
    }

    #[test]
    fn test_replace_all_rejects_duplicates() {
        let (_temp_dir, repo) = create_test_repo();
        let list = vec![
            Budget::new(Category::Travel, Money::from_cents(1)),
            Budget::new(Category::Travel, Money::from_cents(2)),
        ];
        assert!(matches!(
            repo.replace_all(list),
            Err(FinflowError::Duplicate { .. })
        ));
    }

    #[test]
    fn test_save_and_reload() {
        let (temp_dir, repo) = create_test_repo();
        repo.set_amount(Category::Shopping, Money::from_cents(5000))
            .unwrap();
        repo.set_amount(Category::FoodDining, Money::from_cents(10000))
            .unwrap();
        repo.save().unwrap();

        let reloaded = BudgetRepository::new(temp_dir.path().join("budgets.json"));
        reloaded.load().unwrap();
        assert_eq!(reloaded.get_all().unwrap(), repo.get_all().unwrap());
        assert!(reloaded.get(Category::Shopping).unwrap().is_some());
    }

    #[test]
    fn test_load_skips_duplicate_categories() {
        let (temp_dir, repo) = create_test_repo();
        std::fs::write(
            temp_dir.path().join("budgets.json"),
            r#"{"budgets": [
                {"category": "Travel", "amount": 100, "spent": 0},
                {"category": "Travel", "amount": 200, "spent": 0}
            ]}"#,
        )
        .unwrap();

        repo.load().unwrap();
        let all = repo.get_all().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].amount, Money::from_cents(100));
    }
}
