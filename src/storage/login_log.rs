//! Login-history audit log
//!
//! Append-only record of authentication attempts, kept in the same
//! database file as the ledger but independent of it. Queried most-recent
//! first with a caller-supplied row limit.

use std::path::PathBuf;

use chrono::{Local, NaiveDateTime};
use rusqlite::{params, Connection};
use std::fmt;

use crate::error::{ContasError, ContasResult};
use crate::models::{format_timestamp, parse_timestamp};

/// Outcome of an authentication attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginStatus {
    Success,
    Failure,
    UnknownUser,
}

impl LoginStatus {
    /// Wire string stored in the `status` column
    pub fn as_db_str(&self) -> &'static str {
        match self {
            Self::Success => "SUCESSO",
            Self::Failure => "FALHA",
            Self::UnknownUser => "FALHA_USUARIO_INEXISTENTE",
        }
    }

    /// Decode the `status` column
    pub fn from_db_str(s: &str) -> ContasResult<Self> {
        match s {
            "SUCESSO" => Ok(Self::Success),
            "FALHA" => Ok(Self::Failure),
            "FALHA_USUARIO_INEXISTENTE" => Ok(Self::UnknownUser),
            other => Err(ContasError::Parse(format!("unknown login status: {}", other))),
        }
    }
}

impl fmt::Display for LoginStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_db_str())
    }
}

/// One recorded authentication attempt
#[derive(Debug, Clone, PartialEq)]
pub struct LoginEvent {
    pub username: Option<String>,
    pub timestamp: NaiveDateTime,
    pub status: LoginStatus,
    pub ip_address: Option<String>,
}

/// Append-only store for login events
#[derive(Debug, Clone)]
pub struct LoginHistory {
    path: PathBuf,
}

impl LoginHistory {
    /// Create a history backed by the given database file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn connect(&self) -> ContasResult<Connection> {
        Connection::open(&self.path)
            .map_err(|e| ContasError::Db(format!("Failed to open {}: {}", self.path.display(), e)))
    }

    /// Create the login-history table if it does not exist (idempotent)
    pub fn ensure_schema(&self) -> ContasResult<()> {
        let conn = self.connect()?;
        conn.execute(
            "CREATE TABLE IF NOT EXISTS historico_logins (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                username TEXT,
                data_login TEXT NOT NULL,
                status TEXT NOT NULL,
                ip_address TEXT
            )",
            [],
        )?;
        Ok(())
    }

    /// Record an authentication attempt with the current timestamp
    pub fn record(
        &self,
        username: Option<&str>,
        status: LoginStatus,
        ip_address: Option<&str>,
    ) -> ContasResult<()> {
        let conn = self.connect()?;
        conn.execute(
            "INSERT INTO historico_logins (username, data_login, status, ip_address)
             VALUES (?1, ?2, ?3, ?4)",
            params![
                username,
                format_timestamp(Local::now().naive_local()),
                status.as_db_str(),
                ip_address,
            ],
        )?;
        Ok(())
    }

    /// Fetch the most recent events, newest first, up to `limit` rows
    pub fn recent(&self, limit: u32) -> ContasResult<Vec<LoginEvent>> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare(
            "SELECT username, data_login, status, ip_address FROM historico_logins
             ORDER BY data_login DESC LIMIT ?1",
        )?;
        let mapped = stmt.query_map(params![limit], |row| {
            Ok((
                row.get::<_, Option<String>>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, Option<String>>(3)?,
            ))
        })?;

        let mut events = Vec::new();
        for row in mapped {
            let (username, data_login, status, ip_address) = row?;
            events.push(LoginEvent {
                username,
                timestamp: parse_timestamp(&data_login)?,
                status: LoginStatus::from_db_str(&status)?,
                ip_address,
            });
        }
        Ok(events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_history() -> (TempDir, LoginHistory) {
        let temp_dir = TempDir::new().unwrap();
        let history = LoginHistory::new(temp_dir.path().join("financas.db"));
        history.ensure_schema().unwrap();
        (temp_dir, history)
    }

    #[test]
    fn test_record_and_recent() {
        let (_temp_dir, history) = create_test_history();

        history
            .record(Some("maria"), LoginStatus::Success, Some("10.0.0.7"))
            .unwrap();
        history
            .record(Some("jose"), LoginStatus::Failure, None)
            .unwrap();
        history
            .record(None, LoginStatus::UnknownUser, Some("10.0.0.9"))
            .unwrap();

        let events = history.recent(10).unwrap();
        assert_eq!(events.len(), 3);
        // Newest first
        assert_eq!(events[0].status, LoginStatus::UnknownUser);
        assert!(events[0].username.is_none());
        assert_eq!(events[2].username.as_deref(), Some("maria"));
        assert_eq!(events[2].ip_address.as_deref(), Some("10.0.0.7"));
    }

    #[test]
    fn test_limit_caps_result() {
        let (_temp_dir, history) = create_test_history();
        for _ in 0..5 {
            history.record(Some("maria"), LoginStatus::Failure, None).unwrap();
        }

        assert_eq!(history.recent(3).unwrap().len(), 3);
    }

    #[test]
    fn test_shares_db_with_ledger_table() {
        use crate::models::{Money, Transaction};
        use crate::storage::SqliteStore;

        let (_temp_dir, history) = create_test_history();
        let store = SqliteStore::new(history.path.clone());
        store.ensure_schema().unwrap();

        store
            .insert(&Transaction::income("Salário", Money::from_cents(1000)).unwrap())
            .unwrap();
        history.record(Some("maria"), LoginStatus::Success, None).unwrap();

        assert_eq!(store.query(None).unwrap().len(), 1);
        assert_eq!(history.recent(10).unwrap().len(), 1);
    }

    #[test]
    fn test_status_wire_strings() {
        assert_eq!(LoginStatus::Success.as_db_str(), "SUCESSO");
        assert_eq!(
            LoginStatus::from_db_str("FALHA_USUARIO_INEXISTENTE").unwrap(),
            LoginStatus::UnknownUser
        );
        assert!(LoginStatus::from_db_str("ok").is_err());
    }
}
