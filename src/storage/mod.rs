//! Storage layer for contas-cli
//!
//! Two ledger backends share the same transaction model: an append-only
//! CSV file and a single-table SQLite store. The login-history audit log
//! lives in the same database file but is independent of the ledger.

pub mod csv_file;
pub mod login_log;
pub mod sqlite;

pub use csv_file::CsvLedgerStore;
pub use login_log::{LoginEvent, LoginHistory, LoginStatus};
pub use sqlite::{CategoryTotal, MonthFilter, SqliteStore, TransactionUpdate};
