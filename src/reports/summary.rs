//! Financial summary report
//!
//! Total income, total expense, and the running balance.

use crate::ledger::Ledger;
use crate::models::{Money, StoredTransaction};

/// The three headline numbers of a ledger
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinancialSummary {
    /// Sum of income amounts (>= 0)
    pub total_income: Money,
    /// Sum of expense amounts (<= 0)
    pub total_expense: Money,
    /// total_income + total_expense
    pub balance: Money,
}

impl FinancialSummary {
    /// Summarize an in-memory ledger
    pub fn from_ledger(ledger: &Ledger) -> Self {
        let total_income = ledger.total_income();
        let total_expense = ledger.total_expense();
        Self {
            total_income,
            total_expense,
            balance: total_income + total_expense,
        }
    }

    /// Summarize records loaded from the database backend
    pub fn from_stored(transactions: &[StoredTransaction]) -> Self {
        let total_income = transactions
            .iter()
            .filter(|t| t.record.is_income())
            .map(|t| t.record.amount)
            .sum();
        let total_expense = transactions
            .iter()
            .filter(|t| t.record.is_expense())
            .map(|t| t.record.amount)
            .sum();
        Self {
            total_income,
            total_expense,
            balance: total_income + total_expense,
        }
    }

    /// Format the summary for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();
        output.push_str("--- Financial Summary ---\n");
        output.push_str(&format!("Total income:  {}\n", self.total_income));
        // Expenses read better as a magnitude
        output.push_str(&format!("Total expense: {}\n", self.total_expense.abs()));
        output.push_str(&"-".repeat(25));
        output.push('\n');
        output.push_str(&format!("Balance:       {}\n", self.balance));
        output
    }
}
