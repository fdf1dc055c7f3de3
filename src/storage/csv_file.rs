//! Flat-file ledger backend
//!
//! Append-only CSV persistence: header row `Data,Descricao,Valor,Tipo`,
//! one row per transaction, amount as decimal text, timestamp as ISO-8601
//! text. History is immutable by design — there is no update or delete.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ContasError, ContasResult};
use crate::models::{format_timestamp, parse_timestamp, Kind, Money, Transaction};

/// One CSV row in the on-disk encoding
#[derive(Debug, Serialize, Deserialize)]
struct CsvRow {
    #[serde(rename = "Data")]
    data: String,
    #[serde(rename = "Descricao")]
    descricao: String,
    #[serde(rename = "Valor")]
    valor: String,
    #[serde(rename = "Tipo")]
    tipo: String,
}

impl CsvRow {
    fn encode(txn: &Transaction) -> Self {
        Self {
            data: format_timestamp(txn.timestamp),
            descricao: txn.description.clone(),
            valor: txn.amount.to_plain_string(),
            tipo: txn.kind.as_csv_str().to_string(),
        }
    }

    fn decode(self) -> ContasResult<Transaction> {
        let timestamp = parse_timestamp(&self.data)?;
        let amount = Money::parse(&self.valor)
            .map_err(|e| ContasError::Parse(e.to_string()))?;
        let kind = Kind::from_csv_str(&self.tipo)?;
        // The CSV variant never carries a category
        Transaction::from_parts(timestamp, self.descricao, amount, kind, None)
    }
}

/// Append-only CSV store for the ledger
#[derive(Debug, Clone)]
pub struct CsvLedgerStore {
    path: PathBuf,
}

impl CsvLedgerStore {
    /// Create a store backed by the given file path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every row into memory
    ///
    /// An absent file is not an error — it signals an empty ledger and a
    /// fresh start. An unreadable file or a malformed row aborts the whole
    /// load with `ContasError::Load`.
    pub fn load_all(&self) -> ContasResult<Vec<Transaction>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let mut reader = csv::Reader::from_path(&self.path).map_err(|e| {
            ContasError::Load(format!("Failed to open {}: {}", self.path.display(), e))
        })?;

        let mut transactions = Vec::new();
        for (index, result) in reader.deserialize::<CsvRow>().enumerate() {
            let row = result.map_err(|e| {
                ContasError::Load(format!("{}: row {}: {}", self.path.display(), index + 1, e))
            })?;
            let txn = row.decode().map_err(|e| {
                ContasError::Load(format!("{}: row {}: {}", self.path.display(), index + 1, e))
            })?;
            transactions.push(txn);
        }

        Ok(transactions)
    }

    /// Append exactly one row, writing the header first if the file is new
    ///
    /// Repeated identical calls produce repeated rows; duplicate detection
    /// is not performed.
    pub fn append(&self, txn: &Transaction) -> ContasResult<()> {
        let write_header = !self.path.exists();

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| {
                ContasError::Write(format!("Failed to open {}: {}", self.path.display(), e))
            })?;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(write_header)
            .from_writer(file);

        writer
            .serialize(CsvRow::encode(txn))
            .map_err(|e| ContasError::Write(format!("Failed to write row: {}", e)))?;
        writer
            .flush()
            .map_err(|e| ContasError::Write(format!("Failed to flush row: {}", e)))?;

        Ok(())
    }
}
