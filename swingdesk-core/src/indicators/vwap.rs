//! Anchored VWAP.
//!
//! Volume-weighted average close from an anchor bar to the end of the series.
//! A zero-volume window falls back to the last close — expected on illiquid
//! stretches, not an error.

use crate::domain::Bar;

/// Compute the anchored VWAP over `bars[anchor_index..]`.
///
/// An anchor beyond the end yields an empty window and takes the same
/// zero-volume fallback. Returns NaN only for an empty `bars` slice.
pub fn anchored_vwap(bars: &[Bar], anchor_index: usize) -> f64 {
    let last_close = match bars.last() {
        Some(bar) => bar.close,
        None => return f64::NAN,
    };

    let window = &bars[anchor_index.min(bars.len())..];
    let total_volume: f64 = window.iter().map(|b| b.volume).sum();
    if total_volume == 0.0 {
        return last_close;
    }

    window.iter().map(|b| b.close * b.volume).sum::<f64>() / total_volume
}
