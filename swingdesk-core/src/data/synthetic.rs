//! Synthetic candle generator.
//!
//! Seeded random-walk OHLCV for demos and tests when no real candles are at
//! hand. Deterministic for a given seed.

use crate::domain::{Bar, CandleSeries, Timeframe};
use chrono::{Duration, TimeZone, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Parameters for the random walk.
#[derive(Debug, Clone, Copy)]
pub struct SyntheticConfig {
    pub start_price: f64,
    /// Per-bar drift as a fraction of price (positive trends up).
    pub drift: f64,
    /// Per-bar noise amplitude as a fraction of price.
    pub noise: f64,
    pub seed: u64,
}

impl Default for SyntheticConfig {
    fn default() -> Self {
        Self {
            start_price: 100.0,
            drift: 0.002,
            noise: 0.01,
            seed: 42,
        }
    }
}

/// Generate `n` bars of a drifting random walk.
///
/// Prices are floored well above zero so the resulting bars always pass the
/// series sanity checks.
pub fn synthetic_series(n: usize, timeframe: Timeframe, config: SyntheticConfig) -> CandleSeries {
    assert!(n >= 1, "need at least one bar");

    let mut rng = StdRng::seed_from_u64(config.seed);
    let base = Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap();
    let step = Duration::seconds(timeframe.seconds());

    let mut close = config.start_price;
    let mut bars = Vec::with_capacity(n);

    for i in 0..n {
        let open = close;
        let shock: f64 = rng.gen_range(-1.0..1.0);
        close = (open * (1.0 + config.drift + config.noise * shock)).max(config.start_price * 0.01);
        let wick: f64 = rng.gen_range(0.0..config.noise) * open;
        let high = open.max(close) + wick;
        let low = (open.min(close) - wick).max(config.start_price * 0.005);
        let volume = rng.gen_range(500.0..5000.0);
        bars.push(Bar::new(base + step * i as i32, open, high, low, close, volume));
    }

    CandleSeries::new(bars).expect("generated bars are ascending and sane")
}
