//! In-memory ledger
//!
//! The `Ledger` owns the ordered collection of recorded transactions and
//! derives the aggregates from it. It replaces the ambient global list the
//! flat-file variant would otherwise need: operations that need the ledger
//! take it by reference.

use crate::models::{Money, Transaction};

/// The full set of recorded transactions plus derived aggregates
#[derive(Debug, Default)]
pub struct Ledger {
    transactions: Vec<Transaction>,
}

impl Ledger {
    /// Create an empty ledger (fresh start)
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a ledger from already-loaded transactions
    pub fn from_transactions(transactions: Vec<Transaction>) -> Self {
        Self { transactions }
    }

    /// Record a transaction in memory
    ///
    /// Persistence is a separate, explicit step at the backend.
    pub fn record(&mut self, transaction: Transaction) {
        self.transactions.push(transaction);
    }

    /// All transactions in recording order
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Number of recorded transactions
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    /// Check if the ledger has no transactions
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Sum of all income amounts (>= 0)
    pub fn total_income(&self) -> Money {
        self.transactions
            .iter()
            .filter(|t| t.is_income())
            .map(|t| t.amount)
            .sum()
    }

    /// Sum of all expense amounts (<= 0)
    pub fn total_expense(&self) -> Money {
        self.transactions
            .iter()
            .filter(|t| t.is_expense())
            .map(|t| t.amount)
            .sum()
    }

    /// Running balance: the sum of all signed amounts
    pub fn balance(&self) -> Money {
        self.transactions.iter().map(|t| t.amount).sum()
    }

    /// Transactions sorted by timestamp ascending, for the statement view
    pub fn sorted_by_timestamp(&self) -> Vec<&Transaction> {
        let mut sorted: Vec<_> = self.transactions.iter().collect();
        sorted.sort_by_key(|t| t.timestamp);
        sorted
    }
}
