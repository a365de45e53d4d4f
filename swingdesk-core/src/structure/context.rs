//! Market-structure context — the analyzer's summary output.

use crate::structure::zone::Zone;
use serde::{Deserialize, Serialize};

/// Market-structure direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Range,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BosDirection {
    Bullish,
    Bearish,
}

/// A break of structure: a new swing extending beyond the prior same-kind swing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bos {
    pub direction: BosDirection,
    pub index: usize,
    pub price: f64,
}

/// Aggregate snapshot of market structure for one candle series.
///
/// Derivable purely from the series — no external state — and recomputable
/// idempotently: the same series always yields an equal context. This is the
/// sole interface object consumed by the risk advisor, and its JSON form is
/// what advisory providers receive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructureContext {
    pub structure: Direction,
    pub bos: Option<Bos>,
    pub demand: Option<Zone>,
    pub supply: Option<Zone>,
    pub ema21: f64,
    pub ema50: f64,
    pub ema100: f64,
    pub atr14: f64,
}

impl StructureContext {
    /// Whether any reaction zone was found.
    pub fn has_zone(&self) -> bool {
        self.demand.is_some() || self.supply.is_some()
    }
}
