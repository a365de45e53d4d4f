//! Structure analyzer — swings, structure direction, BOS, zones, HTF trend.

use crate::domain::{Bar, CandleSeries, SeriesError};
use crate::indicators::{atr, ema};
use crate::structure::context::{Bos, BosDirection, Direction, StructureContext};
use crate::structure::swing::{find_swings, SwingKind, SwingPoint, DEFAULT_LOOKBACK};
use crate::structure::zone::{Zone, ZoneKind};

/// Bars used for the EMA100 slope in the HTF trend check.
const HTF_SLOPE_BARS: usize = 10;

/// Zone volatility buffer as a fraction of ATR14 at the BOS bar.
const ZONE_ATR_BUFFER: f64 = 0.25;

/// Default distance from the BOS bar back to the zone's base bar.
pub const DEFAULT_BARS_BACK: usize = 3;

/// Hard floor for analysis: full swing windows plus the HTF slope window.
///
/// This is the analyzer's own requirement. Candle suppliers should deliver
/// substantially more (see `data::recommended_min_bars`) to avoid degenerate
/// swing and trend results, but short series above this floor still analyze.
pub const MIN_BARS: usize = 2 * DEFAULT_LOOKBACK + HTF_SLOPE_BARS;

/// Pure reader over one candle series plus indicator columns computed once at
/// construction.
///
/// The analyzer clones the bars into a private working copy, so a series
/// shared between concurrent analyses is never mutated. Every method is a
/// deterministic read; calling anything twice yields identical results.
#[derive(Debug, Clone)]
pub struct StructureAnalyzer {
    bars: Vec<Bar>,
    ema21: Vec<f64>,
    ema50: Vec<f64>,
    ema100: Vec<f64>,
    atr14: Vec<f64>,
}

impl StructureAnalyzer {
    pub fn new(series: &CandleSeries) -> Result<Self, SeriesError> {
        if series.len() < MIN_BARS {
            return Err(SeriesError::TooShort {
                required: MIN_BARS,
                actual: series.len(),
            });
        }

        let bars = series.bars().to_vec();
        let closes = series.closes();
        Ok(Self {
            ema21: ema(&closes, 21),
            ema50: ema(&closes, 50),
            ema100: ema(&closes, 100),
            atr14: atr(&bars, 14),
            bars,
        })
    }

    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    /// Swing points over the default symmetric lookback window.
    pub fn swings(&self) -> Vec<SwingPoint> {
        find_swings(&self.bars, DEFAULT_LOOKBACK)
    }

    /// Classify market structure from the most recent swings.
    ///
    /// Up iff both the latest high and the latest low exceed their immediate
    /// predecessors; Down iff both undercut; anything mixed — or fewer than
    /// two swings of either kind — is Range.
    pub fn structure(&self, swings: &[SwingPoint]) -> Direction {
        let highs: Vec<&SwingPoint> = swings.iter().filter(|s| s.kind == SwingKind::High).collect();
        let lows: Vec<&SwingPoint> = swings.iter().filter(|s| s.kind == SwingKind::Low).collect();

        if highs.len() < 2 || lows.len() < 2 {
            return Direction::Range;
        }

        let (h_last, h_prev) = (highs[highs.len() - 1], highs[highs.len() - 2]);
        let (l_last, l_prev) = (lows[lows.len() - 1], lows[lows.len() - 2]);

        if h_last.price > h_prev.price && l_last.price > l_prev.price {
            Direction::Up
        } else if h_last.price < h_prev.price && l_last.price < l_prev.price {
            Direction::Down
        } else {
            Direction::Range
        }
    }

    /// Detect a break of structure.
    ///
    /// Compares the most recent swing to the most recent prior swing of the
    /// same kind. None with fewer than 3 total swings or when no same-kind
    /// predecessor exists — a valid "no break" outcome, not an error.
    pub fn bos(&self, swings: &[SwingPoint]) -> Option<Bos> {
        if swings.len() < 3 {
            return None;
        }

        let last = swings.last()?;
        let prev = swings[..swings.len() - 1]
            .iter()
            .rev()
            .find(|s| s.kind == last.kind)?;

        match last.kind {
            SwingKind::High if last.price > prev.price => Some(Bos {
                direction: BosDirection::Bullish,
                index: last.index,
                price: last.price,
            }),
            SwingKind::Low if last.price < prev.price => Some(Bos {
                direction: BosDirection::Bearish,
                index: last.index,
                price: last.price,
            }),
            _ => None,
        }
    }

    /// Construct the impulse zone for `kind`, if the current BOS supports it.
    ///
    /// The zone base is the last consolidation bar before the impulse
    /// (`bos_index - bars_back`, clamped to 0), widened by a quarter-ATR to
    /// absorb wick noise.
    pub fn zone(&self, kind: ZoneKind, bars_back: usize) -> Option<Zone> {
        let swings = self.swings();
        let bos = self.bos(&swings)?;

        match (kind, bos.direction) {
            (ZoneKind::Demand, BosDirection::Bullish) => {}
            (ZoneKind::Supply, BosDirection::Bearish) => {}
            _ => return None,
        }

        let base_index = bos.index.saturating_sub(bars_back);
        let base = &self.bars[base_index];
        let buffer = self.atr14[bos.index] * ZONE_ATR_BUFFER;

        let zone = match kind {
            ZoneKind::Demand => Zone::new(
                kind,
                (base.low - buffer).max(0.0),
                base.close,
                base_index,
            ),
            ZoneKind::Supply => Zone::new(kind, base.close, base.high + buffer, base_index),
        };
        Some(zone)
    }

    /// Higher-timeframe trend via double confirmation.
    ///
    /// Up needs a positive EMA100 slope over the last `HTF_SLOPE_BARS` bars
    /// AND the close above EMA50; Down needs the mirror. A single indicator
    /// crossing on its own never flips the call — mixed evidence is Range.
    pub fn htf_trend(&self) -> Direction {
        let n = self.bars.len();
        let slope = self.ema100[n - 1] - self.ema100[n - HTF_SLOPE_BARS];
        let close = self.bars[n - 1].close;
        let ema50 = self.ema50[n - 1];

        if slope > 0.0 && close > ema50 {
            Direction::Up
        } else if slope < 0.0 && close < ema50 {
            Direction::Down
        } else {
            Direction::Range
        }
    }

    /// Assemble the full structure summary.
    ///
    /// The two zones are computed independently — a missing demand zone never
    /// blocks the supply zone. Indicator snapshots are the latest values.
    pub fn context(&self) -> StructureContext {
        let swings = self.swings();
        let n = self.bars.len();

        StructureContext {
            structure: self.structure(&swings),
            bos: self.bos(&swings),
            demand: self.zone(ZoneKind::Demand, DEFAULT_BARS_BACK),
            supply: self.zone(ZoneKind::Supply, DEFAULT_BARS_BACK),
            ema21: self.ema21[n - 1],
            ema50: self.ema50[n - 1],
            ema100: self.ema100[n - 1],
            atr14: self.atr14[n - 1],
        }
    }
}
