//! Login-history listing
//!
//! Prints the most recent authentication attempts from the audit log,
//! newest first.

use crate::config::ContasPaths;
use crate::error::ContasResult;
use crate::storage::LoginHistory;

/// Print up to `limit` recent login events
pub fn run_logins(paths: &ContasPaths, limit: u32) -> ContasResult<()> {
    paths.ensure_directories()?;
    let history = LoginHistory::new(paths.db_file());
    history.ensure_schema()?;

    let events = history.recent(limit)?;
    if events.is_empty() {
        println!("No login events recorded.");
        return Ok(());
    }

    println!(
        "{:<19} | {:<15} | {:<25} | {}",
        "When", "User", "Status", "IP"
    );
    println!("{}", "-".repeat(75));
    for event in events {
        println!(
            "{} | {:<15} | {:<25} | {}",
            event.timestamp.format("%Y-%m-%d %H:%M:%S"),
            event.username.as_deref().unwrap_or("-"),
            event.status.as_db_str(),
            event.ip_address.as_deref().unwrap_or("-"),
        );
    }
    Ok(())
}
