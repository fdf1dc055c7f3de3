//! Category breakdown report
//!
//! Turns the backend's per-category expense totals into shares of total
//! spending, with a divide-by-zero guard for the empty case.

use crate::models::Money;
use crate::storage::CategoryTotal;

/// One category's share of total spending
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryShare {
    pub category: String,
    /// Sum of expense amounts for the category (<= 0)
    pub total: Money,
    /// |total| / sum of |totals| across categories, in percent
    pub percentage: f64,
}

/// Per-category spending report
#[derive(Debug, Clone, Default)]
pub struct CategoryReport {
    pub rows: Vec<CategoryShare>,
}

impl CategoryReport {
    /// Build the report from the backend's aggregated totals
    ///
    /// Preserves the backend ordering (biggest expense first). An empty
    /// category set produces an empty report rather than dividing by zero.
    pub fn from_totals(totals: Vec<CategoryTotal>) -> Self {
        let grand_total: i64 = totals.iter().map(|t| t.total.abs().cents()).sum();

        let rows = totals
            .into_iter()
            .map(|t| {
                let percentage = if grand_total == 0 {
                    0.0
                } else {
                    t.total.abs().cents() as f64 / grand_total as f64 * 100.0
                };
                CategoryShare {
                    category: t.category,
                    total: t.total,
                    percentage,
                }
            })
            .collect();

        Self { rows }
    }

    /// Check if there is nothing to report
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        if self.is_empty() {
            return "No categorized expenses found.\n".to_string();
        }

        let mut output = String::new();
        output.push_str(&format!(
            "{:<20} | {:>15} | {:>8}\n",
            "Category", "Total spent", "% total"
        ));
        output.push_str(&"-".repeat(50));
        output.push('\n');
        for row in &self.rows {
            output.push_str(&format!(
                "{:<20} | {:>15} | {:>7.2}%\n",
                row.category,
                row.total.abs().to_string(),
                row.percentage
            ));
        }
        output
    }
}
