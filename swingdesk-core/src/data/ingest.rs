//! Candle CSV ingest.
//!
//! Expected columns: `ts,open,high,low,close,volume` with RFC 3339 timestamps.
//! Missing columns and unparsable cells are typed errors with enough position
//! information to fix the file; nothing is truncated or synthesized.

use crate::domain::{Bar, CandleSeries, SeriesError};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("failed to open candle CSV: {0}")]
    Open(#[source] csv::Error),

    #[error("candle CSV record {record}: {source}")]
    Malformed {
        record: u64,
        #[source]
        source: csv::Error,
    },

    #[error(transparent)]
    Series(#[from] SeriesError),
}

#[derive(Debug, Deserialize)]
struct CandleRow {
    ts: DateTime<Utc>,
    open: f64,
    high: f64,
    low: f64,
    close: f64,
    volume: f64,
}

impl From<CandleRow> for Bar {
    fn from(row: CandleRow) -> Self {
        Bar::new(row.ts, row.open, row.high, row.low, row.close, row.volume)
    }
}

/// Load and validate a candle series from a CSV file.
pub fn load_candles_csv(path: &Path) -> Result<CandleSeries, IngestError> {
    let mut reader = csv::Reader::from_path(path).map_err(IngestError::Open)?;

    let mut bars = Vec::new();
    for (i, row) in reader.deserialize::<CandleRow>().enumerate() {
        let row = row.map_err(|e| IngestError::Malformed {
            record: i as u64 + 1,
            source: e,
        })?;
        bars.push(Bar::from(row));
    }

    Ok(CandleSeries::new(bars)?)
}
