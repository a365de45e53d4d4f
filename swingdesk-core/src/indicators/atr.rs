//! Average True Range (ATR).
//!
//! True Range: max(high-low, |high-prev_close|, |low-prev_close|).
//! The first bar has no previous close, so TR[0] = high[0] - low[0].
//! ATR is the EMA of true range with the same period (alpha = 2/(period+1)).

use crate::domain::Bar;
use crate::indicators::ema;

/// Compute the True Range series from bars.
pub fn true_range(bars: &[Bar]) -> Vec<f64> {
    let mut tr = Vec::with_capacity(bars.len());

    for (i, bar) in bars.iter().enumerate() {
        let hl = bar.high - bar.low;
        if i == 0 {
            tr.push(hl);
        } else {
            let pc = bars[i - 1].close;
            tr.push(hl.max((bar.high - pc).abs()).max((bar.low - pc).abs()));
        }
    }

    tr
}

/// Compute the ATR series. Same length as the input.
pub fn atr(bars: &[Bar], period: usize) -> Vec<f64> {
    ema(&true_range(bars), period)
}
