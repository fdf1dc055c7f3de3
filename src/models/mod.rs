//! Core data models for contas-cli
//!
//! Contains the money type and the transaction record shared by both
//! persistence backends.

pub mod money;
pub mod transaction;

pub use money::{Money, MoneyParseError};
pub use transaction::{
    format_timestamp, parse_timestamp, Kind, StoredTransaction, Transaction, TransactionId,
};
