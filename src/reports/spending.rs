//! Spending Report
//!
//! Spending trends for the terminal: expenses per month for the last six
//! months with expenses, and expenses per category.

use chrono::NaiveDate;
use tabled::settings::{object::Columns, Alignment, Modify, Style};
use tabled::{Table, Tabled};

use crate::models::{CategoryPalette, Money, Transaction, TransactionType};

use super::aggregation::{
    category_expense_breakdown, current_month_transactions, monthly_expense_series,
    total_by_type, CategoryExpense, MonthlyExpense,
};

/// Which transactions the category breakdown covers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpendingScope {
    /// Only the month containing the reference date
    CurrentMonth(NaiveDate),
    /// Every stored transaction
    AllTime,
}

/// Monthly trend plus category breakdown
#[derive(Debug, Clone, PartialEq)]
pub struct SpendingReport {
    pub scope: SpendingScope,
    pub monthly: Vec<MonthlyExpense>,
    pub categories: Vec<CategoryExpense>,
    /// Total expenses within `scope`
    pub total_expenses: Money,
}

impl SpendingReport {
    /// Generate the report
    ///
    /// The monthly trend always spans all transactions; `scope` narrows the
    /// category breakdown.
    pub fn generate(
        transactions: &[Transaction],
        palette: &CategoryPalette,
        scope: SpendingScope,
    ) -> Self {
        let scoped = match scope {
            SpendingScope::CurrentMonth(date) => current_month_transactions(transactions, date),
            SpendingScope::AllTime => transactions.to_vec(),
        };

        Self {
            scope,
            monthly: monthly_expense_series(transactions),
            categories: category_expense_breakdown(&scoped, palette),
            total_expenses: total_by_type(&scoped, TransactionType::Expense),
        }
    }

    /// Share of the scoped total for one category entry
    pub fn share(&self, entry: &CategoryExpense) -> f64 {
        entry.amount.percent_of(self.total_expenses)
    }

    /// Format the monthly trend for terminal display
    pub fn format_monthly(&self, currency_symbol: &str) -> String {
        if self.monthly.is_empty() {
            return "No expense data available.\n".to_string();
        }

        let peak = self
            .monthly
            .iter()
            .map(|m| m.amount)
            .max()
            .unwrap_or_else(Money::zero);

        let mut output = String::from("Monthly Expenses\n");
        output.push_str(&"=".repeat(50));
        output.push('\n');
        for month in &self.monthly {
            let width = (month.amount.percent_of(peak) / 100.0 * 24.0).round() as usize;
            output.push_str(&format!(
                "{:<9} {:>14} {}\n",
                month.label,
                month.amount.format_with_symbol(currency_symbol),
                "█".repeat(width)
            ));
        }
        output
    }

    /// Format the category breakdown as a table
    pub fn format_categories(&self, currency_symbol: &str) -> String {
        if self.categories.is_empty() {
            return "No expense data available.\n".to_string();
        }

        #[derive(Tabled)]
        struct Row {
            #[tabled(rename = "Category")]
            category: String,
            #[tabled(rename = "Amount")]
            amount: String,
            #[tabled(rename = "Share")]
            share: String,
            #[tabled(rename = "Color")]
            color: String,
        }

        let rows: Vec<Row> = self
            .categories
            .iter()
            .map(|c| Row {
                category: c.category.name().to_string(),
                amount: c.amount.format_with_symbol(currency_symbol),
                share: format!("{:.1}%", self.share(c)),
                color: c.color.clone(),
            })
            .collect();

        let heading = match self.scope {
            SpendingScope::CurrentMonth(date) => {
                format!("Expenses by Category - {}\n", date.format("%B %Y"))
            }
            SpendingScope::AllTime => "Expenses by Category - All Time\n".to_string(),
        };

        let mut table = Table::new(rows);
        table
            .with(Style::rounded())
            .with(Modify::new(Columns::new(1..3)).with(Alignment::right()));

        format!(
            "{}{}\nTotal: {}\n",
            heading,
            table,
            self.total_expenses.format_with_symbol(currency_symbol)
        )
    }
}
