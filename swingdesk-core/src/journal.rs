//! Append-only CSV trade journal.
//!
//! One flat record per accepted or rejected plan. The core produces the
//! numeric fields; this adapter only persists them. Column names follow the
//! established journal layout, including the `risk_%`/`risk_$` headers.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum JournalError {
    #[error("failed to open journal {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("journal record error: {0}")]
    Record(#[from] csv::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Decision {
    Accepted,
    Rejected,
}

/// One journal row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub time: String,
    pub symbol: String,
    pub tf: String,
    pub setup: String,
    pub entry: f64,
    pub stop: f64,
    pub tp1: f64,
    pub tp2: f64,
    pub tp3: f64,
    pub rr_min: f64,
    #[serde(rename = "risk_%")]
    pub risk_percent: f64,
    #[serde(rename = "risk_$")]
    pub risk_dollars: f64,
    pub qty: f64,
    pub decision: Decision,
}

/// Append-only journal file. Creates the file with a header row on first
/// append; subsequent appends add records only.
#[derive(Debug, Clone)]
pub struct TradeJournal {
    path: PathBuf,
}

impl TradeJournal {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn append(&self, entry: &JournalEntry) -> Result<(), JournalError> {
        let exists = self.path.exists();
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|source| JournalError::Io {
                path: self.path.display().to_string(),
                source,
            })?;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(!exists)
            .from_writer(file);
        writer.serialize(entry)?;
        writer.flush().map_err(csv::Error::from)?;
        Ok(())
    }

    /// Read back all recorded entries.
    pub fn entries(&self) -> Result<Vec<JournalEntry>, JournalError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let mut reader = csv::Reader::from_path(&self.path)?;
        let mut entries = Vec::new();
        for record in reader.deserialize() {
            entries.push(record?);
        }
        Ok(entries)
    }
}
