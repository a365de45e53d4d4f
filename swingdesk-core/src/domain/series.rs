//! Validated candle series.
//!
//! `CandleSeries` is the immutable input to every analysis. Construction is the
//! single validation gate: empty input and out-of-order timestamps fail fast
//! here, so downstream code never re-checks ordering. Derived columns are never
//! written back into the series — analyzers compute them into their own copy.

use crate::domain::Bar;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Input-shape errors for candle series.
#[derive(Debug, Error)]
pub enum SeriesError {
    #[error("candle series is empty")]
    Empty,

    #[error("candle series too short: need at least {required} bars, got {actual}")]
    TooShort { required: usize, actual: usize },

    #[error("timestamps not strictly ascending at index {index}")]
    NonAscending { index: usize },

    #[error("bar at index {index} fails OHLC sanity check")]
    InsaneBar { index: usize },
}

/// An ordered, strictly time-ascending OHLCV series.
///
/// Immutable after construction; all analysis methods take `&self`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandleSeries {
    bars: Vec<Bar>,
}

impl CandleSeries {
    /// Validate and wrap a bar vector.
    ///
    /// Fails fast on empty input, non-ascending or duplicate timestamps, and
    /// bars that violate OHLC ordering. Never truncates or synthesizes data.
    pub fn new(bars: Vec<Bar>) -> Result<Self, SeriesError> {
        if bars.is_empty() {
            return Err(SeriesError::Empty);
        }
        for (i, bar) in bars.iter().enumerate() {
            if !bar.is_sane() {
                return Err(SeriesError::InsaneBar { index: i });
            }
            if i > 0 && bar.ts <= bars[i - 1].ts {
                return Err(SeriesError::NonAscending { index: i });
            }
        }
        Ok(Self { bars })
    }

    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Last bar of the series. Always present — empty series cannot be constructed.
    pub fn last(&self) -> &Bar {
        self.bars.last().expect("series is non-empty by construction")
    }

    /// Close prices in series order.
    pub fn closes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.close).collect()
    }
}
