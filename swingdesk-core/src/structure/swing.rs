//! Swing-point detection.

use crate::domain::Bar;
use serde::{Deserialize, Serialize};

/// Default symmetric lookback window for swing confirmation.
pub const DEFAULT_LOOKBACK: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SwingKind {
    High,
    Low,
}

/// A confirmed local price extremum.
///
/// `index` is an offset into the series the swing was computed from; swings
/// are recomputed fresh on every call and never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SwingPoint {
    pub index: usize,
    pub price: f64,
    pub kind: SwingKind,
}

/// Find all swing points over a symmetric `lookback` window.
///
/// Bar `i` is a swing high iff its high is strictly greater than the high of
/// every other bar in `[i - lookback, i + lookback]`; symmetric for lows.
/// Edge bars without a full window on both sides are never candidates, so a
/// confirmed swing does not change when future bars are appended.
/// Results are in ascending index order.
pub fn find_swings(bars: &[Bar], lookback: usize) -> Vec<SwingPoint> {
    let mut swings = Vec::new();
    if bars.len() < 2 * lookback + 1 {
        return swings;
    }

    for i in lookback..bars.len() - lookback {
        let window = &bars[i - lookback..=i + lookback];

        let strict_high = window
            .iter()
            .enumerate()
            .all(|(j, b)| j == lookback || bars[i].high > b.high);
        if strict_high {
            swings.push(SwingPoint {
                index: i,
                price: bars[i].high,
                kind: SwingKind::High,
            });
        }

        let strict_low = window
            .iter()
            .enumerate()
            .all(|(j, b)| j == lookback || bars[i].low < b.low);
        if strict_low {
            swings.push(SwingPoint {
                index: i,
                price: bars[i].low,
                kind: SwingKind::Low,
            });
        }
    }

    swings
}
