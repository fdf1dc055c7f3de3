//! contas-cli - Terminal-based personal finance ledger
//!
//! This library provides the core functionality for the contas ledger
//! utilities: recording signed income/expense transactions, persisting
//! them to an append-only CSV file or a single-table SQLite database, and
//! aggregating them into summaries and category breakdowns.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path management
//! - `error`: Custom error types
//! - `models`: Core data models (money, transactions)
//! - `ledger`: In-memory ledger with derived aggregates
//! - `storage`: CSV and SQLite backends plus the login audit log
//! - `reports`: Summary, statement, and category reports
//! - `cli`: Interactive menu shells
//!
//! # Example
//!
//! ```rust,ignore
//! use contas_cli::ledger::Ledger;
//! use contas_cli::models::{Money, Transaction};
//!
//! let mut ledger = Ledger::new();
//! ledger.record(Transaction::income("Salário", Money::from_cents(100000))?);
//! assert_eq!(ledger.balance().cents(), 100000);
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod ledger;
pub mod models;
pub mod reports;
pub mod storage;

pub use error::{ContasError, ContasResult};
