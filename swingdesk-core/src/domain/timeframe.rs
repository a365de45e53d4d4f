//! Candle timeframe.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error)]
#[error("unsupported interval: {0}")]
pub struct TimeframeError(pub String);

/// Supported candle intervals.
///
/// Anything else is rejected at the boundary — the core never guesses a
/// substitute interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Timeframe {
    /// 4-hour candles.
    H4,
    /// Daily candles.
    D1,
}

impl Timeframe {
    pub fn as_str(&self) -> &'static str {
        match self {
            Timeframe::H4 => "4h",
            Timeframe::D1 => "1d",
        }
    }

    /// Bar duration in seconds.
    pub fn seconds(&self) -> i64 {
        match self {
            Timeframe::H4 => 4 * 3600,
            Timeframe::D1 => 24 * 3600,
        }
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Timeframe {
    type Err = TimeframeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "4h" => Ok(Timeframe::H4),
            "1d" => Ok(Timeframe::D1),
            other => Err(TimeframeError(other.to_string())),
        }
    }
}
