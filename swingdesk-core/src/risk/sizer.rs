//! Position sizing from a risk budget.

use serde::{Deserialize, Serialize};

/// Result of sizing one trade. `quantity == 0` iff the stop distance is
/// degenerate; callers must check before acting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sizing {
    pub quantity: f64,
    pub risk_dollars: f64,
}

impl Sizing {
    /// The degenerate-stop result.
    pub fn zero() -> Self {
        Self {
            quantity: 0.0,
            risk_dollars: 0.0,
        }
    }
}

/// Maps (entry, stop, risk percent) to a trade quantity against fixed capital.
///
/// Stateless per call: rounding is cosmetic and never compounds, since each
/// call is independent.
#[derive(Debug, Clone, Copy)]
pub struct PositionSizer {
    capital: f64,
}

impl PositionSizer {
    pub fn new(capital: f64) -> Self {
        assert!(capital >= 0.0, "capital must be non-negative");
        Self { capital }
    }

    pub fn capital(&self) -> f64 {
        self.capital
    }

    /// Size a trade risking `risk_percent` of capital between entry and stop.
    ///
    /// A zero stop distance is an expected market state (entry on the stop),
    /// resolved by the zero fallback rather than an error.
    pub fn size(&self, entry: f64, stop: f64, risk_percent: f64) -> Sizing {
        let stop_distance = (entry - stop).abs();
        if stop_distance <= 0.0 {
            return Sizing::zero();
        }

        let risk_dollars = self.capital * risk_percent / 100.0;
        Sizing {
            quantity: round_dp(risk_dollars / stop_distance, 6),
            risk_dollars: round_dp(risk_dollars, 2),
        }
    }
}

fn round_dp(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::testing::{assert_approx, DEFAULT_EPSILON};

    #[test]
    fn zero_stop_distance_sizes_to_zero() {
        let sizing = PositionSizer::new(1000.0).size(100.0, 100.0, 1.0);
        assert_eq!(sizing, Sizing::zero());
    }

    #[test]
    fn sizes_basic_long() {
        // risk = 1000 * 1% = $10, stop distance = 10 → qty = 1.0
        let sizing = PositionSizer::new(1000.0).size(110.0, 100.0, 1.0);
        assert_approx(sizing.quantity, 1.0, DEFAULT_EPSILON);
        assert_approx(sizing.risk_dollars, 10.0, DEFAULT_EPSILON);
    }

    #[test]
    fn stop_side_does_not_matter() {
        let sizer = PositionSizer::new(1000.0);
        let long = sizer.size(110.0, 100.0, 1.0);
        let short = sizer.size(100.0, 110.0, 1.0);
        assert_eq!(long, short);
    }

    #[test]
    fn quantity_rounds_to_six_decimals() {
        // risk = $10, distance = 3 → 3.333333...
        let sizing = PositionSizer::new(1000.0).size(103.0, 100.0, 1.0);
        assert_approx(sizing.quantity, 3.333333, DEFAULT_EPSILON);
    }

    #[test]
    fn risk_dollars_round_to_cents() {
        let sizing = PositionSizer::new(1234.56).size(110.0, 100.0, 1.0);
        // 1234.56 * 1% = 12.3456 → 12.35 after rounding
        assert_approx(sizing.risk_dollars, 12.35, DEFAULT_EPSILON);
    }

    #[test]
    fn outputs_are_non_negative() {
        let sizing = PositionSizer::new(100.0).size(50.0, 55.0, 2.5);
        assert!(sizing.quantity >= 0.0);
        assert!(sizing.risk_dollars >= 0.0);
    }
}
