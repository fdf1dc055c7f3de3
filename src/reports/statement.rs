//! Statement (extrato) report
//!
//! Renders the ledger as a chronological listing, one line per
//! transaction, oldest first.

use crate::ledger::Ledger;
use crate::models::{StoredTransaction, Transaction};

fn format_row(txn: &Transaction) -> String {
    format!(
        "{} - {:<30} - {:>12}",
        txn.timestamp.format("%d/%m/%Y %H:%M"),
        txn.description,
        txn.amount.to_string(),
    )
}

/// Format the in-memory ledger as a statement, oldest record first
pub fn format_statement(ledger: &Ledger) -> String {
    if ledger.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let mut output = String::new();
    for txn in ledger.sorted_by_timestamp() {
        output.push_str(&format_row(txn));
        output.push('\n');
    }
    output
}

/// Format database-backed records as a statement with ids and categories
///
/// The backend already returns rows ordered by timestamp ascending.
pub fn format_stored_statement(transactions: &[StoredTransaction]) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let mut output = String::new();
    for stored in transactions {
        output.push_str(&format!(
            "ID: {:>4} | {} | {:<25} | {:<15} | {:>12}\n",
            stored.id,
            stored.record.timestamp.format("%d/%m/%Y"),
            stored.record.description,
            stored.record.category.as_deref().unwrap_or("N/A"),
            stored.record.amount.to_string(),
        ));
    }
    output
}
