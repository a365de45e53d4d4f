//! Candle supply contract.
//!
//! Retrieval itself (HTTP, mirrors, retries, caching) lives outside the core.
//! This trait is the single documented contract a supplier must meet; the
//! core treats any delivery failure as an input error and never retries.

use crate::domain::{CandleSeries, SeriesError, Timeframe};
use thiserror::Error;

/// Structured error types for candle delivery.
///
/// Displayable in both CLI and dashboard contexts.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("network unreachable: {0}")]
    NetworkUnreachable(String),

    #[error("rate limited by provider (retry after {retry_after_secs}s)")]
    RateLimited { retry_after_secs: u64 },

    #[error("symbol not found: {symbol}")]
    SymbolNotFound { symbol: String },

    #[error("response format changed: {0}")]
    ResponseFormatChanged(String),

    #[error(transparent)]
    Series(#[from] SeriesError),

    #[error("data error: {0}")]
    Other(String),
}

/// Trait for candle suppliers.
///
/// Implementations must deliver a validated, time-ascending series for the
/// requested symbol and timeframe, ideally at least
/// `recommended_min_bars(DEFAULT_LOOKBACK)` bars long.
pub trait CandleProvider: Send + Sync {
    /// Human-readable name of this provider.
    fn name(&self) -> &str;

    /// Fetch candles for a symbol at a timeframe.
    fn fetch(&self, symbol: &str, timeframe: Timeframe) -> Result<CandleSeries, DataError>;
}

/// Delivery floor that avoids degenerate swing and trend results:
/// full swing windows on both sides, the longest EMA, and the HTF slope
/// window.
pub fn recommended_min_bars(lookback: usize) -> usize {
    2 * lookback + 100 + 10
}

/// Suggested fetch depth per timeframe, in bars.
pub fn default_fetch_limit(timeframe: Timeframe) -> usize {
    match timeframe {
        Timeframe::H4 => 500,
        Timeframe::D1 => 400,
    }
}
