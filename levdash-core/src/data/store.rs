//! Immutable in-memory record store.
//!
//! The store is built once at startup from the trade export and then only
//! read. Every query borrows it; nothing mutates it after `load`.

use chrono::NaiveDate;
use std::collections::HashSet;
use std::io::Read;
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::schema::{CsvRow, REQUIRED_COLUMNS};
use crate::domain::TradeRecord;
use crate::query::{self, FilterCriteria};

/// Errors raised while building the store. All of them are fatal at startup.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("missing required column '{column}'")]
    MissingColumn { column: String },

    #[error("malformed row at line {line}: {source}")]
    MalformedRow {
        line: u64,
        #[source]
        source: csv::Error,
    },

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("input contains a header but no trade records")]
    Empty,
}

/// Read-only table of trade records in load order.
#[derive(Debug, Clone)]
pub struct RecordStore {
    records: Vec<TradeRecord>,
    dataset_hash: String,
    source: Option<PathBuf>,
}

impl RecordStore {
    /// Load the store from a CSV file on disk.
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let bytes = std::fs::read(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut store = Self::from_csv_bytes(&bytes)?;
        store.source = Some(path.to_path_buf());
        tracing::info!(
            path = %path.display(),
            records = store.len(),
            dataset = %store.short_hash(),
            "loaded trade records"
        );
        Ok(store)
    }

    /// Load the store from any reader producing CSV text.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self, LoadError> {
        let mut bytes = Vec::new();
        reader
            .read_to_end(&mut bytes)
            .map_err(|source| LoadError::Io {
                path: PathBuf::from("<reader>"),
                source,
            })?;
        Self::from_csv_bytes(&bytes)
    }

    /// Parse CSV bytes. The dataset hash is BLAKE3 over the raw bytes.
    pub fn from_csv_bytes(bytes: &[u8]) -> Result<Self, LoadError> {
        let mut rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(bytes);

        let headers = rdr.headers()?.clone();
        for column in REQUIRED_COLUMNS {
            if !headers.iter().any(|h| h == *column) {
                return Err(LoadError::MissingColumn {
                    column: (*column).to_string(),
                });
            }
        }

        let mut records = Vec::new();
        for (i, row) in rdr.deserialize::<CsvRow>().enumerate() {
            // Line 1 is the header.
            let row = row.map_err(|source| LoadError::MalformedRow {
                line: i as u64 + 2,
                source,
            })?;
            records.push(TradeRecord::from(row));
        }

        if records.is_empty() {
            return Err(LoadError::Empty);
        }

        Ok(Self {
            records,
            dataset_hash: blake3::hash(bytes).to_hex().to_string(),
            source: None,
        })
    }

    /// Build a store from records already in memory (tests, fixtures).
    pub fn from_records(records: Vec<TradeRecord>) -> Self {
        let mut hasher = blake3::Hasher::new();
        for r in &records {
            let line = format!(
                "{:?}|{}|{}|{}|{}|{}|{}|{}|{}|{}\n",
                r.number,
                r.exchange,
                r.margin,
                r.entry_time,
                r.trade_type,
                r.exposure,
                r.entry_balance,
                r.exit_balance,
                r.pnl,
                r.btc_price
            );
            hasher.update(line.as_bytes());
        }
        Self {
            records,
            dataset_hash: hasher.finalize().to_hex().to_string(),
            source: None,
        }
    }

    /// All records in load order.
    pub fn records(&self) -> &[TradeRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn dataset_hash(&self) -> &str {
        &self.dataset_hash
    }

    /// First 12 hex chars of the dataset hash, for display.
    pub fn short_hash(&self) -> &str {
        &self.dataset_hash[..self.dataset_hash.len().min(12)]
    }

    /// Path the store was loaded from, if it came from disk.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Run a filter query against the whole store.
    pub fn query(&self, criteria: &FilterCriteria) -> Vec<&TradeRecord> {
        let matched = query::filter(&self.records, criteria);
        tracing::debug!(
            exchange = %criteria.exchange,
            leverage = criteria.leverage,
            start = %criteria.start,
            end = %criteria.end,
            matched = matched.len(),
            "filter query"
        );
        matched
    }

    /// Distinct exchanges, in order of first appearance.
    pub fn exchanges(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.records
            .iter()
            .map(|r| r.exchange.as_str())
            .filter(|e| seen.insert(*e))
            .collect()
    }

    /// Distinct leverage multipliers, in order of first appearance.
    pub fn leverages(&self) -> Vec<u32> {
        let mut seen = HashSet::new();
        self.records
            .iter()
            .map(|r| r.margin)
            .filter(|m| seen.insert(*m))
            .collect()
    }

    /// Earliest and latest entry date for one exchange.
    pub fn date_bounds(&self, exchange: &str) -> Option<(NaiveDate, NaiveDate)> {
        bounds(self.records.iter().filter(|r| r.exchange == exchange))
    }

    /// Earliest and latest entry date across the whole store.
    pub fn overall_date_bounds(&self) -> Option<(NaiveDate, NaiveDate)> {
        bounds(self.records.iter())
    }
}

fn bounds<'a>(records: impl Iterator<Item = &'a TradeRecord>) -> Option<(NaiveDate, NaiveDate)> {
    records.fold(None, |acc, r| {
        let d = r.entry_date();
        Some(match acc {
            None => (d, d),
            Some((lo, hi)) => (lo.min(d), hi.max(d)),
        })
    })
}
