//! Reports for contas-cli
//!
//! Each report aggregates ledger data and offers a `format_terminal`
//! renderer for the interactive shells.

pub mod categories;
pub mod statement;
pub mod summary;

pub use categories::{CategoryReport, CategoryShare};
pub use statement::{format_statement, format_stored_statement};
pub use summary::FinancialSummary;
