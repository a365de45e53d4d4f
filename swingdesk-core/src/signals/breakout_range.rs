//! Range-breakout setup.

use crate::domain::CandleSeries;
use crate::signals::{EntryStop, SignalProvider};

/// Close beyond the prior N-bar range.
///
/// The reference range deliberately excludes the breakout bar itself — a
/// close can never exceed its own high, so including the final bar would make
/// the high-side trigger unreachable. Stop goes to the range midpoint in
/// either direction.
#[derive(Debug, Clone)]
pub struct BreakoutRange {
    window: usize,
}

impl Default for BreakoutRange {
    fn default() -> Self {
        Self::new(20)
    }
}

impl BreakoutRange {
    pub fn new(window: usize) -> Self {
        assert!(window >= 1, "breakout window must be >= 1");
        Self { window }
    }
}

impl SignalProvider for BreakoutRange {
    fn name(&self) -> &str {
        "breakout_range"
    }

    fn min_bars(&self) -> usize {
        self.window + 1
    }

    fn signal(&self, series: &CandleSeries) -> Option<EntryStop> {
        let bars = series.bars();
        let n = bars.len();
        if n < self.min_bars() {
            return None;
        }

        let range = &bars[n - 1 - self.window..n - 1];
        let hi = range.iter().map(|b| b.high).fold(f64::MIN, f64::max);
        let lo = range.iter().map(|b| b.low).fold(f64::MAX, f64::min);
        let close = bars[n - 1].close;

        if close > hi || close < lo {
            Some(EntryStop {
                entry: close,
                stop: (hi + lo) / 2.0,
            })
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::testing::{assert_approx, make_ohlc_bars, DEFAULT_EPSILON};

    fn flat_with_final_close(close: f64) -> CandleSeries {
        // 21 bars: twenty of 99..101 range, then a final bar closing at `close`.
        let mut data: Vec<(f64, f64, f64, f64)> =
            (0..20).map(|_| (100.0, 101.0, 99.0, 100.0)).collect();
        let high = close.max(100.0) + 0.5;
        let low = close.min(100.0) - 0.5;
        data.push((100.0, high, low, close));
        CandleSeries::new(make_ohlc_bars(&data)).unwrap()
    }

    #[test]
    fn fires_on_upside_breakout() {
        let series = flat_with_final_close(103.0);
        let es = BreakoutRange::default().signal(&series).unwrap();
        assert_approx(es.entry, 103.0, DEFAULT_EPSILON);
        // Midpoint of the prior 99..101 range.
        assert_approx(es.stop, 100.0, DEFAULT_EPSILON);
    }

    #[test]
    fn fires_on_downside_breakout() {
        let series = flat_with_final_close(97.0);
        let es = BreakoutRange::default().signal(&series).unwrap();
        assert_approx(es.entry, 97.0, DEFAULT_EPSILON);
        assert_approx(es.stop, 100.0, DEFAULT_EPSILON);
    }

    #[test]
    fn silent_inside_the_range() {
        let series = flat_with_final_close(100.5);
        assert!(BreakoutRange::default().signal(&series).is_none());
    }

    #[test]
    fn silent_below_min_bars() {
        let data: Vec<(f64, f64, f64, f64)> =
            (0..10).map(|_| (100.0, 101.0, 99.0, 100.0)).collect();
        let series = CandleSeries::new(make_ohlc_bars(&data)).unwrap();
        assert!(BreakoutRange::default().signal(&series).is_none());
    }
}
