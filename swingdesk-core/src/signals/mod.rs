//! Signal providers — optional entry/stop proposals.
//!
//! Providers are portfolio-agnostic: they see only the candle series and
//! answer "where would this setup enter and stop out right now, if anywhere".
//! Callers pass a provider in explicitly; there is no registry or inheritance
//! hierarchy. A `None` answer means the setup is simply not present — a valid
//! outcome, not an error.

pub mod breakout_range;
pub mod pullback_ema21;

pub use breakout_range::BreakoutRange;
pub use pullback_ema21::PullbackEma21;

use crate::domain::CandleSeries;
use serde::{Deserialize, Serialize};

/// An entry/stop pair proposed by a signal provider.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EntryStop {
    pub entry: f64,
    pub stop: f64,
}

/// Trait for setup detectors.
///
/// Implementations must be pure reads of the series: no side effects, no
/// portfolio state, deterministic given identical input.
pub trait SignalProvider: Send + Sync {
    /// Setup name as recorded in the journal (e.g. "breakout_range").
    fn name(&self) -> &str;

    /// Bars required before the provider can produce output.
    fn min_bars(&self) -> usize;

    /// Evaluate the setup on the latest bar.
    fn signal(&self, series: &CandleSeries) -> Option<EntryStop>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::testing::make_bars;

    struct AlwaysLong;

    impl SignalProvider for AlwaysLong {
        fn name(&self) -> &str {
            "always_long"
        }

        fn min_bars(&self) -> usize {
            1
        }

        fn signal(&self, series: &CandleSeries) -> Option<EntryStop> {
            let close = series.last().close;
            Some(EntryStop {
                entry: close,
                stop: close * 0.95,
            })
        }
    }

    #[test]
    fn provider_trait_object_works() {
        let provider: &dyn SignalProvider = &AlwaysLong;
        let series = CandleSeries::new(make_bars(&[100.0, 101.0])).unwrap();
        let es = provider.signal(&series).unwrap();
        assert_eq!(es.entry, 101.0);
    }
}
