//! Pullback-to-EMA21 setup.

use crate::domain::CandleSeries;
use crate::indicators::{atr, ema};
use crate::signals::{EntryStop, SignalProvider};

/// Pullback onto a rising EMA21.
///
/// Fires when the EMA21 is higher than five bars back and the close sits
/// within 0.2 ATR of it. Entry at the close; stop at the lower of the signal
/// bar's low and EMA21 − 1.5 ATR. Long-only — a falling EMA21 is a trend
/// filter failure, not a short setup.
#[derive(Debug, Clone, Default)]
pub struct PullbackEma21;

/// Bars back used for the EMA slope check.
const SLOPE_BARS: usize = 5;

/// Maximum close-to-EMA distance, as a fraction of ATR14.
const PROXIMITY_ATR: f64 = 0.2;

/// Stop distance below the EMA, in ATR14 units.
const STOP_ATR: f64 = 1.5;

impl SignalProvider for PullbackEma21 {
    fn name(&self) -> &str {
        "pullback_ema21"
    }

    fn min_bars(&self) -> usize {
        21
    }

    fn signal(&self, series: &CandleSeries) -> Option<EntryStop> {
        let bars = series.bars();
        let n = bars.len();
        if n < self.min_bars() {
            return None;
        }

        let ema21 = ema(&series.closes(), 21);
        let atr14 = atr(bars, 14);

        let e = ema21[n - 1];
        let a = atr14[n - 1];
        let close = bars[n - 1].close;

        let rising = e > ema21[n - SLOPE_BARS];
        let near = (close - e).abs() <= PROXIMITY_ATR * a;
        if rising && near {
            Some(EntryStop {
                entry: close,
                stop: bars[n - 1].low.min(e - STOP_ATR * a),
            })
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::testing::make_ohlc_bars;

    /// Slow grind up: EMA21 rises and the close never strays far from it
    /// relative to the bar range (the EMA lag of a 0.02 drift is ~0.2, well
    /// inside 0.2x the ~2.0 ATR).
    fn grinding_series(n: usize) -> CandleSeries {
        let data: Vec<(f64, f64, f64, f64)> = (0..n)
            .map(|i| {
                let p = 100.0 + 0.02 * i as f64;
                (p, p + 1.0, p - 1.0, p)
            })
            .collect();
        CandleSeries::new(make_ohlc_bars(&data)).unwrap()
    }

    #[test]
    fn fires_on_pullback_to_rising_ema() {
        let series = grinding_series(40);
        let es = PullbackEma21.signal(&series).unwrap();
        assert_eq!(es.entry, series.last().close);
        assert!(es.stop < es.entry);
    }

    #[test]
    fn silent_when_price_far_from_ema() {
        // Same grind, then a large gap away from the EMA on the final bar.
        let mut data: Vec<(f64, f64, f64, f64)> = (0..39)
            .map(|i| {
                let p = 100.0 + 0.02 * i as f64;
                (p, p + 1.0, p - 1.0, p)
            })
            .collect();
        data.push((101.0, 120.5, 100.5, 120.0));
        let series = CandleSeries::new(make_ohlc_bars(&data)).unwrap();
        assert!(PullbackEma21.signal(&series).is_none());
    }

    #[test]
    fn silent_when_ema_falling() {
        let data: Vec<(f64, f64, f64, f64)> = (0..40)
            .map(|i| {
                let p = 200.0 - 0.1 * i as f64;
                (p, p + 0.3, p - 0.3, p)
            })
            .collect();
        let series = CandleSeries::new(make_ohlc_bars(&data)).unwrap();
        assert!(PullbackEma21.signal(&series).is_none());
    }

    #[test]
    fn silent_below_min_bars() {
        let series = grinding_series(10);
        assert!(PullbackEma21.signal(&series).is_none());
    }
}
