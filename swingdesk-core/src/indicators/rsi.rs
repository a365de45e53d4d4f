//! Relative Strength Index (RSI).
//!
//! Wilder smoothing (alpha = 1/period) of average gains and average losses,
//! RSI = 100 - 100 / (1 + avg_gain / (avg_loss + EPS)).
//!
//! The epsilon denominator keeps a zero-loss window from dividing by zero —
//! an expected market state (monotone rally), not an error. Index 0 has no
//! price change yet and reports the neutral 50.0, so the output is the same
//! length as the input and always inside [0, 100].

/// Division guard for all-gain windows.
const EPS: f64 = 1e-9;

/// Compute the RSI of a close-price series.
pub fn rsi(closes: &[f64], period: usize) -> Vec<f64> {
    assert!(period >= 1, "RSI period must be >= 1");

    let n = closes.len();
    let mut result = Vec::with_capacity(n);
    if n == 0 {
        return result;
    }

    // No delta at the first bar: neutral.
    result.push(50.0);
    if n == 1 {
        return result;
    }

    let alpha = 1.0 / period as f64;

    // Seed the smoothed averages with the first change.
    let first_delta = closes[1] - closes[0];
    let mut avg_gain = first_delta.max(0.0);
    let mut avg_loss = (-first_delta).max(0.0);
    result.push(rsi_value(avg_gain, avg_loss));

    for i in 2..n {
        let delta = closes[i] - closes[i - 1];
        let gain = delta.max(0.0);
        let loss = (-delta).max(0.0);
        avg_gain = alpha * gain + (1.0 - alpha) * avg_gain;
        avg_loss = alpha * loss + (1.0 - alpha) * avg_loss;
        result.push(rsi_value(avg_gain, avg_loss));
    }

    result
}

fn rsi_value(avg_gain: f64, avg_loss: f64) -> f64 {
    let rs = avg_gain / (avg_loss + EPS);
    100.0 - 100.0 / (1.0 + rs)
}
