//! Trade plan — entry, stop and R-multiple targets for one proposed trade.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TradeDirection {
    Long,
    Short,
}

/// Default R-multiples for the three targets.
pub const DEFAULT_RR_MULTIPLES: [f64; 3] = [1.0, 1.5, 2.0];

/// Direction-aware R-multiple targets.
///
/// One R is the entry-to-stop distance; targets extend from the entry in the
/// trade direction (above for longs, below for shorts). Entry above the stop
/// means long.
pub fn rr_targets(entry: f64, stop: f64, multiples: &[f64]) -> Vec<f64> {
    let r = (entry - stop).abs();
    let sign = if entry >= stop { 1.0 } else { -1.0 };
    multiples.iter().map(|m| entry + sign * m * r).collect()
}

/// A fully-specified trade proposal: the numeric fields the journal records
/// and the presentation layer renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradePlan {
    pub direction: TradeDirection,
    pub entry: f64,
    pub stop: f64,
    pub tp1: f64,
    pub tp2: f64,
    pub tp3: f64,
    /// Minimum acceptable risk/reward ratio this plan was screened against.
    pub rr_min: f64,
}

impl TradePlan {
    /// Build a plan from an entry/stop pair using the default R-multiples.
    pub fn from_entry_stop(entry: f64, stop: f64, rr_min: f64) -> Self {
        let targets = rr_targets(entry, stop, &DEFAULT_RR_MULTIPLES);
        Self {
            direction: if entry >= stop {
                TradeDirection::Long
            } else {
                TradeDirection::Short
            },
            entry,
            stop,
            tp1: targets[0],
            tp2: targets[1],
            tp3: targets[2],
            rr_min,
        }
    }

    /// Risk/reward ratio of the first target. Zero R collapses to 0.
    pub fn rr_to_tp1(&self) -> f64 {
        let r = (self.entry - self.stop).abs();
        if r <= 0.0 {
            return 0.0;
        }
        (self.tp1 - self.entry).abs() / r
    }

    /// Whether the first target clears the minimum RR screen.
    pub fn meets_min_rr(&self) -> bool {
        self.rr_to_tp1() >= self.rr_min
    }
}
