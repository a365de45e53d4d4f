//! Supply and demand zones.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ZoneKind {
    Demand,
    Supply,
}

/// A candidate reaction area anchored at the base of the most recent impulse.
///
/// `start_price <= end_price` always holds; the anchor is the index of the
/// last consolidation bar before the impulse. Zones are ephemeral — recomputed
/// per request, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    pub kind: ZoneKind,
    pub start_price: f64,
    pub end_price: f64,
    pub anchor_index: usize,
}

impl Zone {
    pub fn new(kind: ZoneKind, start_price: f64, end_price: f64, anchor_index: usize) -> Self {
        debug_assert!(start_price <= end_price, "zone bounds out of order");
        Self {
            kind,
            start_price,
            end_price,
            anchor_index,
        }
    }

    /// Price height of the zone.
    pub fn height(&self) -> f64 {
        self.end_price - self.start_price
    }

    /// Whether a price sits inside the zone (inclusive).
    pub fn contains(&self, price: f64) -> bool {
        (self.start_price..=self.end_price).contains(&price)
    }
}
