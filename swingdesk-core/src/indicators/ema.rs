//! Exponential Moving Average (EMA).
//!
//! Recursive: EMA[t] = alpha * x[t] + (1 - alpha) * EMA[t-1], alpha = 2/(period+1).
//! Seed: EMA[0] = x[0] (no finite-sample adjustment), so the output has the
//! same length as the input and is defined from the first bar.

/// Compute the EMA of a value series.
///
/// Pure function; output length always equals input length and
/// `out[0] == values[0]` for non-empty input.
pub fn ema(values: &[f64], period: usize) -> Vec<f64> {
    assert!(period >= 1, "EMA period must be >= 1");

    let mut result = Vec::with_capacity(values.len());
    let alpha = 2.0 / (period as f64 + 1.0);

    let mut prev = match values.first() {
        Some(&v) => v,
        None => return result,
    };
    result.push(prev);

    for &v in &values[1..] {
        prev = alpha * v + (1.0 - alpha) * prev;
        result.push(prev);
    }

    result
}
