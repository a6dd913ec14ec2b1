//! Monthly Summary Report
//!
//! The at-a-glance view: this month's income, expenses and net, plus how the
//! budgets stand overall.

use chrono::NaiveDate;

use crate::models::{Budget, Money, Transaction, TransactionType};

use super::aggregation::{current_month_transactions, total_by_type};

/// Headline figures for the month containing the reference date
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthlySummary {
    pub reference_date: NaiveDate,
    pub income: Money,
    pub expenses: Money,
    /// Income minus expenses; negative when more went out than came in
    pub net: Money,
    pub total_budgeted: Money,
    pub total_spent: Money,
    /// Budgeted minus spent; negative when budgets are overspent overall
    pub budget_remaining: Money,
    /// Number of budgets whose spending exceeds their ceiling
    pub over_budget_count: usize,
    pub transaction_count: usize,
}

impl MonthlySummary {
    /// Build the summary from the full transaction list and budget list
    pub fn generate(
        transactions: &[Transaction],
        budgets: &[Budget],
        reference_date: NaiveDate,
    ) -> Self {
        let current = current_month_transactions(transactions, reference_date);
        let income = total_by_type(&current, TransactionType::Income);
        let expenses = total_by_type(&current, TransactionType::Expense);

        let total_budgeted: Money = budgets.iter().map(|b| b.amount).sum();
        let total_spent: Money = budgets.iter().map(|b| b.spent).sum();

        Self {
            reference_date,
            income,
            expenses,
            net: income - expenses,
            total_budgeted,
            total_spent,
            budget_remaining: total_budgeted - total_spent,
            over_budget_count: budgets.iter().filter(|b| b.is_over_budget()).count(),
            transaction_count: current.len(),
        }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, currency_symbol: &str) -> String {
        let fmt = |m: Money| m.format_with_symbol(currency_symbol);
        let mut output = String::new();

        output.push_str(&format!(
            "Summary - {}\n",
            self.reference_date.format("%B %Y")
        ));
        output.push_str(&"=".repeat(40));
        output.push('\n');
        output.push_str(&format!("{:<20} {:>18}\n", "Monthly Income", fmt(self.income)));
        output.push_str(&format!("{:<20} {:>18}\n", "Monthly Expenses", fmt(self.expenses)));
        output.push_str(&format!("{:<20} {:>18}\n", "Net Income", fmt(self.net)));
        output.push_str(&"-".repeat(40));
        output.push('\n');
        output.push_str(&format!("{:<20} {:>18}\n", "Budgeted", fmt(self.total_budgeted)));
        output.push_str(&format!("{:<20} {:>18}\n", "Spent", fmt(self.total_spent)));
        output.push_str(&format!(
            "{:<20} {:>18}\n",
            "Remaining",
            fmt(self.budget_remaining)
        ));

        if self.over_budget_count > 0 {
            output.push_str(&format!(
                "\n{} budget(s) over limit\n",
                self.over_budget_count
            ));
        }

        output.push_str(&format!(
            "\n{} transaction(s) this month\n",
            self.transaction_count
        ));

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn sample_transactions() -> Vec<Transaction> {
        vec![
            Transaction::expense(
                Money::from_cents(5000),
                "Groceries",
                date("2024-03-05"),
                Category::FoodDining,
            ),
            Transaction::income(
                Money::from_cents(200000),
                "Salary",
                date("2024-03-01"),
                Category::Other,
            ),
            Transaction::expense(
                Money::from_cents(9900),
                "Old bill",
                date("2024-02-20"),
                Category::BillsUtilities,
            ),
        ]
    }

    #[test]
    fn test_generate_summary() {
        let budgets = vec![
            Budget {
                category: Category::FoodDining,
                amount: Money::from_cents(4000),
                spent: Money::from_cents(5000),
            },
            Budget {
                category: Category::Travel,
                amount: Money::from_cents(20000),
                spent: Money::zero(),
            },
        ];

        let summary =
            MonthlySummary::generate(&sample_transactions(), &budgets, date("2024-03-15"));

        assert_eq!(summary.income, Money::from_cents(200000));
        assert_eq!(summary.expenses, Money::from_cents(5000));
        assert_eq!(summary.net, Money::from_cents(195000));
        assert_eq!(summary.total_budgeted, Money::from_cents(24000));
        assert_eq!(summary.total_spent, Money::from_cents(5000));
        assert_eq!(summary.budget_remaining, Money::from_cents(19000));
        assert_eq!(summary.over_budget_count, 1);
        assert_eq!(summary.transaction_count, 2);
    }

    #[test]
    fn test_net_can_be_negative() {
        let summary = MonthlySummary::generate(&sample_transactions(), &[], date("2024-02-01"));
        assert_eq!(summary.income, Money::zero());
        assert_eq!(summary.net, Money::from_cents(-9900));
    }

    #[test]
    fn test_empty_summary() {
        let summary = MonthlySummary::generate(&[], &[], date("2024-02-01"));
        assert_eq!(summary.net, Money::zero());
        assert_eq!(summary.over_budget_count, 0);
        assert_eq!(summary.transaction_count, 0);
    }

    #[test]
    fn test_terminal_format() {
        let summary = MonthlySummary::generate(&sample_transactions(), &[], date("2024-03-15"));
        let output = summary.format_terminal("$");

        assert!(output.contains("Summary - March 2024"));
        assert!(output.contains("$2000.00"));
        assert!(output.contains("$1950.00"));
        assert!(!output.contains("over limit"));
    }
}
