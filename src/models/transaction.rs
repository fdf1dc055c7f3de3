//! Transaction model
//!
//! A transaction is the atomic ledger unit: timestamp, description, signed
//! amount, kind, and (for expenses in the database variant) a category.
//! The sign of the amount always matches the kind, so summing a ledger
//! needs no branching.

use chrono::{Local, NaiveDateTime};
use std::fmt;

use crate::error::{ContasError, ContasResult};

use super::money::Money;

/// Income or Expense classification of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Income,
    Expense,
}

impl Kind {
    /// Wire string used in the CSV `Tipo` column
    pub fn as_csv_str(&self) -> &'static str {
        match self {
            Self::Income => "Ganho",
            Self::Expense => "Gasto",
        }
    }

    /// Wire string used in the database `tipo` column
    pub fn as_db_str(&self) -> &'static str {
        match self {
            Self::Income => "ganho",
            Self::Expense => "gasto",
        }
    }

    /// Decode the CSV `Tipo` column
    pub fn from_csv_str(s: &str) -> ContasResult<Self> {
        match s {
            "Ganho" => Ok(Self::Income),
            "Gasto" => Ok(Self::Expense),
            other => Err(ContasError::Parse(format!("unknown kind: {}", other))),
        }
    }

    /// Decode the database `tipo` column
    pub fn from_db_str(s: &str) -> ContasResult<Self> {
        match s {
            "ganho" => Ok(Self::Income),
            "gasto" => Ok(Self::Expense),
            other => Err(ContasError::Parse(format!("unknown kind: {}", other))),
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
        }
    }
}

/// Surrogate key assigned by the database backend
///
/// Only present for records that went through the relational store; the
/// CSV backend is append-only and has no record addressing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TransactionId(i64);

impl TransactionId {
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    pub const fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<i64> for TransactionId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// A recorded income or expense
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    /// When the transaction was recorded
    pub timestamp: NaiveDateTime,

    /// Free-form description, never empty
    pub description: String,

    /// Signed amount: positive for income, negative for expense
    pub amount: Money,

    /// Income or Expense
    pub kind: Kind,

    /// Optional label, present only for expenses in the database variant
    pub category: Option<String>,
}

impl Transaction {
    /// Record an income from a positive magnitude
    pub fn income(description: impl Into<String>, magnitude: Money) -> ContasResult<Self> {
        Self::from_parts(
            Local::now().naive_local(),
            description.into(),
            magnitude,
            Kind::Income,
            None,
        )
    }

    /// Record an expense from a positive magnitude; the stored amount is negated
    pub fn expense(
        description: impl Into<String>,
        magnitude: Money,
        category: Option<String>,
    ) -> ContasResult<Self> {
        Self::from_parts(
            Local::now().naive_local(),
            description.into(),
            -magnitude,
            Kind::Expense,
            category,
        )
    }

    /// Assemble a transaction from already-signed parts
    ///
    /// This is the decode path used by the storage backends. It rejects an
    /// empty description and any amount whose sign contradicts the kind.
    pub fn from_parts(
        timestamp: NaiveDateTime,
        description: String,
        amount: Money,
        kind: Kind,
        category: Option<String>,
    ) -> ContasResult<Self> {
        if description.trim().is_empty() {
            return Err(ContasError::Validation(
                "description must not be empty".into(),
            ));
        }
        match kind {
            Kind::Income if amount.is_negative() => {
                return Err(ContasError::Validation(format!(
                    "income amount must not be negative: {}",
                    amount
                )));
            }
            Kind::Expense if amount.is_positive() => {
                return Err(ContasError::Validation(format!(
                    "expense amount must not be positive: {}",
                    amount
                )));
            }
            _ => {}
        }
        // Only expenses carry a category
        if kind == Kind::Income && category.is_some() {
            return Err(ContasError::Validation(
                "income must not carry a category".into(),
            ));
        }

        Ok(Self {
            timestamp,
            description,
            amount,
            kind,
            category,
        })
    }

    /// Check if this is an income
    pub fn is_income(&self) -> bool {
        self.kind == Kind::Income
    }

    /// Check if this is an expense
    pub fn is_expense(&self) -> bool {
        self.kind == Kind::Expense
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.timestamp.format("%Y-%m-%d %H:%M"),
            self.description,
            self.amount
        )
    }
}

/// A transaction paired with its database surrogate key
#[derive(Debug, Clone, PartialEq)]
pub struct StoredTransaction {
    pub id: TransactionId,
    pub record: Transaction,
}

/// Encode a timestamp as the ISO-8601 text stored on the wire
pub fn format_timestamp(ts: NaiveDateTime) -> String {
    ts.format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
}

/// Decode an ISO-8601 timestamp, with or without fractional seconds
pub fn parse_timestamp(s: &str) -> ContasResult<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f"))
        .map_err(|e| ContasError::Parse(format!("invalid timestamp '{}': {}", s, e)))
}
