//! Relational ledger backend
//!
//! Single-table SQLite persistence for the richer variant: surrogate keys,
//! partial updates, deletes, month filtering, and the per-category expense
//! summary. The connection is opened fresh per operation and dropped at
//! scope end — access is single-process and strictly sequential, so there
//! is no pooling and no held locks across operations.

use std::path::{Path, PathBuf};

use rusqlite::{params, Connection, OptionalExtension};

use crate::error::{ContasError, ContasResult};
use crate::models::{
    format_timestamp, parse_timestamp, Kind, Money, StoredTransaction, Transaction, TransactionId,
};

/// Restricts a query to records whose timestamp falls in one calendar month
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthFilter {
    year: i32,
    month: u32,
}

impl MonthFilter {
    /// Build a filter for the given calendar month
    pub fn new(year: i32, month: u32) -> ContasResult<Self> {
        if !(1..=12).contains(&month) {
            return Err(ContasError::Parse(format!("invalid month: {}", month)));
        }
        if year < 0 {
            return Err(ContasError::Parse(format!("invalid year: {}", year)));
        }
        Ok(Self { year, month })
    }

    /// The "YYYY-MM" key compared against `strftime('%Y-%m', data)`
    pub fn key(&self) -> String {
        format!("{:04}-{:02}", self.year, self.month)
    }
}

/// Partial update of a stored transaction
///
/// Fields left as `None` are unchanged. The amount is a positive magnitude;
/// the stored sign is re-derived from the record's kind so the sign/kind
/// invariant survives edits. The kind itself is not updatable.
#[derive(Debug, Clone, Default)]
pub struct TransactionUpdate {
    pub description: Option<String>,
    pub amount: Option<Money>,
    pub category: Option<String>,
}

impl TransactionUpdate {
    /// Check whether the update would change anything
    pub fn is_empty(&self) -> bool {
        self.description.is_none() && self.amount.is_none() && self.category.is_none()
    }
}

/// One row of the per-category expense summary
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    pub category: String,
    /// Sum of expense amounts for the category (<= 0)
    pub total: Money,
}

/// SQLite-backed transaction store
#[derive(Debug, Clone)]
pub struct SqliteStore {
    path: PathBuf,
}

impl SqliteStore {
    /// Create a store backed by the given database file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing database path
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn connect(&self) -> ContasResult<Connection> {
        Connection::open(&self.path)
            .map_err(|e| ContasError::Db(format!("Failed to open {}: {}", self.path.display(), e)))
    }

    /// Create the transaction table if it does not exist (idempotent)
    pub fn ensure_schema(&self) -> ContasResult<()> {
        let conn = self.connect()?;
        conn.execute(
            "CREATE TABLE IF NOT EXISTS transacoes (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                data TEXT NOT NULL,
                descricao TEXT NOT NULL,
                valor REAL NOT NULL,
                tipo TEXT NOT NULL,
                categoria TEXT
            )",
            [],
        )?;
        Ok(())
    }

    /// Insert a transaction and return its assigned surrogate key
    pub fn insert(&self, txn: &Transaction) -> ContasResult<TransactionId> {
        let conn = self.connect()?;
        conn.execute(
            "INSERT INTO transacoes (data, descricao, valor, tipo, categoria)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                format_timestamp(txn.timestamp),
                txn.description,
                txn.amount.to_decimal(),
                txn.kind.as_db_str(),
                txn.category,
            ],
        )?;
        Ok(TransactionId::new(conn.last_insert_rowid()))
    }

    /// Fetch stored transactions, ordered by timestamp ascending
    ///
    /// With a `MonthFilter`, only records whose timestamp falls in that
    /// calendar month are returned.
    pub fn query(&self, filter: Option<MonthFilter>) -> ContasResult<Vec<StoredTransaction>> {
        let conn = self.connect()?;

        let mut rows: Vec<RawRow> = Vec::new();
        match filter {
            Some(month) => {
                let mut stmt = conn.prepare(
                    "SELECT id, data, descricao, valor, tipo, categoria FROM transacoes
                     WHERE strftime('%Y-%m', data) = ?1 ORDER BY data",
                )?;
                let mapped = stmt.query_map(params![month.key()], RawRow::from_row)?;
                for row in mapped {
                    rows.push(row?);
                }
            }
            None => {
                let mut stmt = conn.prepare(
                    "SELECT id, data, descricao, valor, tipo, categoria FROM transacoes
                     ORDER BY data",
                )?;
                let mapped = stmt.query_map([], RawRow::from_row)?;
                for row in mapped {
                    rows.push(row?);
                }
            }
        }

        rows.into_iter().map(RawRow::decode).collect()
    }

    /// Fetch a single stored transaction by id
    pub fn get(&self, id: TransactionId) -> ContasResult<StoredTransaction> {
        let conn = self.connect()?;
        let row = conn
            .query_row(
                "SELECT id, data, descricao, valor, tipo, categoria FROM transacoes
                 WHERE id = ?1",
                params![id.value()],
                RawRow::from_row,
            )
            .optional()?
            .ok_or_else(|| ContasError::transaction_not_found(id.to_string()))?;
        row.decode()
    }

    /// Partially update a stored transaction
    ///
    /// Fails with `NotFound` if the id does not exist.
    pub fn update(&self, id: TransactionId, update: TransactionUpdate) -> ContasResult<()> {
        let existing = self.get(id)?;

        let description = update
            .description
            .unwrap_or_else(|| existing.record.description.clone());
        let amount = match update.amount {
            // Magnitude is re-signed from the stored kind
            Some(magnitude) => match existing.record.kind {
                Kind::Income => magnitude.abs(),
                Kind::Expense => -magnitude.abs(),
            },
            None => existing.record.amount,
        };
        let category = update.category.or(existing.record.category);

        let conn = self.connect()?;
        conn.execute(
            "UPDATE transacoes SET descricao = ?1, valor = ?2, categoria = ?3 WHERE id = ?4",
            params![description, amount.to_decimal(), category, id.value()],
        )?;
        Ok(())
    }

    /// Delete a stored transaction
    ///
    /// Fails with `NotFound` if the id does not exist; a second delete of
    /// the same id reports not-found, not success.
    pub fn delete(&self, id: TransactionId) -> ContasResult<()> {
        let conn = self.connect()?;
        let affected = conn.execute("DELETE FROM transacoes WHERE id = ?1", params![id.value()])?;
        if affected == 0 {
            return Err(ContasError::transaction_not_found(id.to_string()));
        }
        Ok(())
    }

    /// Aggregate expense amounts per category, biggest expense first
    ///
    /// Totals are negative, so ascending order puts the largest magnitude
    /// at the top.
    pub fn category_summary(&self) -> ContasResult<Vec<CategoryTotal>> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare(
            "SELECT categoria, SUM(valor) AS total FROM transacoes
             WHERE tipo = 'gasto' AND categoria IS NOT NULL
             GROUP BY categoria
             ORDER BY total ASC",
        )?;
        let mapped = stmt.query_map([], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, f64>(1)?))
        })?;

        let mut totals = Vec::new();
        for row in mapped {
            let (category, total) = row?;
            totals.push(CategoryTotal {
                category,
                total: Money::from_decimal(total),
            });
        }
        Ok(totals)
    }
}

/// Loosely-typed row as it comes back from SQLite
///
/// Decoding into a `Transaction` is an explicit step at the backend
/// boundary; malformed rows are rejected with a reported error rather than
/// propagated as raw untyped data.
struct RawRow {
    id: i64,
    data: String,
    descricao: String,
    valor: f64,
    tipo: String,
    categoria: Option<String>,
}

impl RawRow {
    fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            data: row.get(1)?,
            descricao: row.get(2)?,
            valor: row.get(3)?,
            tipo: row.get(4)?,
            categoria: row.get(5)?,
        })
    }

    fn decode(self) -> ContasResult<StoredTransaction> {
        let timestamp = parse_timestamp(&self.data)
            .map_err(|e| ContasError::Load(format!("row {}: {}", self.id, e)))?;
        let kind = Kind::from_db_str(&self.tipo)
            .map_err(|e| ContasError::Load(format!("row {}: {}", self.id, e)))?;
        let record = Transaction::from_parts(
            timestamp,
            self.descricao,
            Money::from_decimal(self.valor),
            kind,
            self.categoria,
        )
        .map_err(|e| ContasError::Load(format!("row {}: {}", self.id, e)))?;

        Ok(StoredTransaction {
            id: TransactionId::new(self.id),
            record,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::parse_timestamp;
    use tempfile::TempDir;

    fn create_test_store() -> (TempDir, SqliteStore) {
        let temp_dir = TempDir::new().unwrap();
        let store = SqliteStore::new(temp_dir.path().join("financas.db"));
        store.ensure_schema().unwrap();
        (temp_dir, store)
    }

    fn txn_at(iso: &str, description: &str, cents: i64, category: Option<&str>) -> Transaction {
        let kind = if cents >= 0 { Kind::Income } else { Kind::Expense };
        Transaction::from_parts(
            parse_timestamp(iso).unwrap(),
            description.into(),
            Money::from_cents(cents),
            kind,
            category.map(String::from),
        )
        .unwrap()
    }

    #[test]
    fn test_ensure_schema_is_idempotent() {
        let (_temp_dir, store) = create_test_store();
        store.ensure_schema().unwrap();
        store.ensure_schema().unwrap();
        assert!(store.query(None).unwrap().is_empty());
    }

    #[test]
    fn test_insert_assigns_increasing_ids() {
        let (_temp_dir, store) = create_test_store();
        let first = store
            .insert(&txn_at("2025-05-01T09:00:00", "Salário", 100000, None))
            .unwrap();
        let second = store
            .insert(&txn_at("2025-05-02T12:00:00", "Almoço", -5000, Some("Alimentação")))
            .unwrap();
        assert!(second > first);
    }

    #[test]
    fn test_query_orders_by_timestamp_ascending() {
        let (_temp_dir, store) = create_test_store();
        store
            .insert(&txn_at("2025-05-20T09:00:00", "Mais novo", 2000, None))
            .unwrap();
        store
            .insert(&txn_at("2025-05-01T09:00:00", "Mais velho", 1000, None))
            .unwrap();

        let all = store.query(None).unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].record.description, "Mais velho");
        assert_eq!(all[1].record.description, "Mais novo");
    }

    #[test]
    fn test_month_filter() {
        let (_temp_dir, store) = create_test_store();
        store
            .insert(&txn_at("2025-05-10T09:00:00", "Dentro", 1000, None))
            .unwrap();
        store
            .insert(&txn_at("2025-04-30T23:59:00", "Antes", 1000, None))
            .unwrap();
        store
            .insert(&txn_at("2025-06-01T00:00:00", "Depois", 1000, None))
            .unwrap();

        let filter = MonthFilter::new(2025, 5).unwrap();
        assert_eq!(filter.key(), "2025-05");

        let filtered = store.query(Some(filter)).unwrap();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].record.description, "Dentro");
    }

    #[test]
    fn test_month_filter_rejects_bad_month() {
        assert!(MonthFilter::new(2025, 0).is_err());
        assert!(MonthFilter::new(2025, 13).is_err());
    }

    #[test]
    fn test_partial_update_keeps_omitted_fields() {
        let (_temp_dir, store) = create_test_store();
        let id = store
            .insert(&txn_at("2025-05-10T12:00:00", "Almoço", -5000, Some("Alimentação")))
            .unwrap();

        store
            .update(
                id,
                TransactionUpdate {
                    description: Some("Almoço de domingo".into()),
                    ..Default::default()
                },
            )
            .unwrap();

        let stored = store.get(id).unwrap();
        assert_eq!(stored.record.description, "Almoço de domingo");
        assert_eq!(stored.record.amount.cents(), -5000);
        assert_eq!(stored.record.category.as_deref(), Some("Alimentação"));
    }

    #[test]
    fn test_amount_update_is_resigned_from_kind() {
        let (_temp_dir, store) = create_test_store();
        let id = store
            .insert(&txn_at("2025-05-10T12:00:00", "Almoço", -5000, Some("Alimentação")))
            .unwrap();

        // The new amount arrives as a positive magnitude
        store
            .update(
                id,
                TransactionUpdate {
                    amount: Some(Money::from_cents(6500)),
                    ..Default::default()
                },
            )
            .unwrap();

        let stored = store.get(id).unwrap();
        assert_eq!(stored.record.amount.cents(), -6500);
        assert!(stored.record.is_expense());
    }

    #[test]
    fn test_update_missing_id_is_not_found() {
        let (_temp_dir, store) = create_test_store();
        let err = store
            .update(
                TransactionId::new(99),
                TransactionUpdate {
                    description: Some("Nada".into()),
                    ..Default::default()
                },
            )
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_delete_then_get_is_not_found() {
        let (_temp_dir, store) = create_test_store();
        let id = store
            .insert(&txn_at("2025-05-10T12:00:00", "Almoço", -5000, None))
            .unwrap();

        store.delete(id).unwrap();
        assert!(store.get(id).unwrap_err().is_not_found());
    }

    #[test]
    fn test_double_delete_is_not_found() {
        let (_temp_dir, store) = create_test_store();
        let id = store
            .insert(&txn_at("2025-05-10T12:00:00", "Almoço", -5000, None))
            .unwrap();

        store.delete(id).unwrap();
        let err = store.delete(id).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_income_row_with_category_rejected_on_decode() {
        let (_temp_dir, store) = create_test_store();

        // Bypass insert() to plant a malformed row: an income with a category
        let conn = Connection::open(store.path()).unwrap();
        conn.execute(
            "INSERT INTO transacoes (data, descricao, valor, tipo, categoria)
             VALUES ('2025-05-01T09:00:00', 'Salário', 1000.0, 'ganho', 'Alimentação')",
            [],
        )
        .unwrap();

        let err = store.query(None).unwrap_err();
        assert!(matches!(err, ContasError::Load(_)));
    }

    #[test]
    fn test_category_summary_biggest_expense_first() {
        let (_temp_dir, store) = create_test_store();
        store
            .insert(&txn_at("2025-05-01T09:00:00", "Salário", 100000, None))
            .unwrap();
        store
            .insert(&txn_at("2025-05-02T12:00:00", "Almoço", -5000, Some("Alimentação")))
            .unwrap();
        store
            .insert(&txn_at("2025-05-03T08:00:00", "Aluguel", -120000, Some("Moradia")))
            .unwrap();
        store
            .insert(&txn_at("2025-05-04T20:00:00", "Jantar", -8000, Some("Alimentação")))
            .unwrap();
        // Uncategorized expense stays out of the summary
        store
            .insert(&txn_at("2025-05-05T10:00:00", "Avulso", -100, None))
            .unwrap();

        let summary = store.category_summary().unwrap();
        assert_eq!(summary.len(), 2);
        assert_eq!(summary[0].category, "Moradia");
        assert_eq!(summary[0].total.cents(), -120000);
        assert_eq!(summary[1].category, "Alimentação");
        assert_eq!(summary[1].total.cents(), -13000);
    }

    #[test]
    fn test_worked_example() {
        let (_temp_dir, store) = create_test_store();
        store
            .insert(&txn_at("2025-05-01T09:00:00", "Salário", 100000, None))
            .unwrap();
        store
            .insert(&txn_at("2025-05-02T12:00:00", "Almoço", -5000, Some("Alimentação")))
            .unwrap();

        let all = store.query(None).unwrap();
        let income: Money = all
            .iter()
            .filter(|t| t.record.is_income())
            .map(|t| t.record.amount)
            .sum();
        let expense: Money = all
            .iter()
            .filter(|t| t.record.is_expense())
            .map(|t| t.record.amount)
            .sum();
        assert_eq!(income.cents(), 100000);
        assert_eq!(expense.cents(), -5000);
        assert_eq!((income + expense).cents(), 95000);

        let summary = store.category_summary().unwrap();
        assert_eq!(summary.len(), 1);
        assert_eq!(summary[0].category, "Alimentação");
        assert_eq!(summary[0].total.cents(), -5000);
    }
}
