//! End-to-end pipeline test: candle series → structure context → risk
//! advice → position size.

use chrono::{Duration, TimeZone, Utc};
use swingdesk_core::domain::{Bar, CandleSeries};
use swingdesk_core::risk::{PositionSizer, RiskAdvisor, RiskBracket, RiskFlags};
use swingdesk_core::structure::{BosDirection, Direction, StructureAnalyzer};

fn bar(i: usize, open: f64, high: f64, low: f64, close: f64) -> Bar {
    let base = Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap();
    Bar::new(base + Duration::hours(4 * i as i64), open, high, low, close, 1000.0)
}

/// 60 bars: a zig-zag uptrend with higher highs and higher lows, moderate
/// volatility, finishing with a breakout bar above the prior 20-bar high.
fn rising_breakout_series() -> CandleSeries {
    const OSC: [f64; 8] = [0.0, 2.0, 4.0, 2.0, 0.0, -2.0, -4.0, -2.0];
    let mut bars = Vec::with_capacity(60);

    for i in 0..52 {
        let p = 100.0 + i as f64 + OSC[i % 8];
        bars.push(bar(i, p, p + 1.0, p - 1.0, p));
    }
    // Shallow dip, rally, breakout at 57, then two quieter bars that confirm
    // the swing high.
    for (offset, p) in [150.0, 153.0, 156.0, 160.0, 165.0, 172.0, 170.0, 169.0]
        .into_iter()
        .enumerate()
    {
        let i = 52 + offset;
        bars.push(bar(i, p, p + 1.0, p - 1.0, p));
    }

    CandleSeries::new(bars).unwrap()
}

#[test]
fn rising_series_produces_bullish_context() {
    let series = rising_breakout_series();
    let analyzer = StructureAnalyzer::new(&series).unwrap();
    let ctx = analyzer.context();

    assert_eq!(ctx.structure, Direction::Up);

    let bos = ctx.bos.expect("uptrend breakout must register a BOS");
    assert_eq!(bos.direction, BosDirection::Bullish);
    assert_eq!(bos.index, 57);
    assert_eq!(bos.price, 173.0);

    // Bullish break: demand zone present, supply absent.
    let demand = ctx.demand.expect("bullish BOS must anchor a demand zone");
    assert!(demand.start_price <= demand.end_price);
    assert_eq!(demand.anchor_index, 54);
    assert!(ctx.supply.is_none());

    assert_eq!(analyzer.htf_trend(), Direction::Up);
}

#[test]
fn rising_series_earns_at_least_mid_risk() {
    let series = rising_breakout_series();
    let ctx = StructureAnalyzer::new(&series).unwrap().context();
    let advice = RiskAdvisor::new().recommend(&ctx, RiskFlags::default());

    assert!(advice.percent >= 1.5);
    assert_eq!(advice.bracket, RiskBracket::High);
}

#[test]
fn context_recomputation_is_byte_identical() {
    let series = rising_breakout_series();
    let analyzer = StructureAnalyzer::new(&series).unwrap();

    let first = analyzer.context();
    let second = analyzer.context();
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_vec(&first).unwrap(),
        serde_json::to_vec(&second).unwrap()
    );

    // A fresh analyzer over the same unmodified series agrees too.
    let third = StructureAnalyzer::new(&series).unwrap().context();
    assert_eq!(first, third);
}

#[test]
fn advice_flows_into_sizing() {
    let series = rising_breakout_series();
    let ctx = StructureAnalyzer::new(&series).unwrap().context();
    let advice = RiskAdvisor::new().recommend(&ctx, RiskFlags::default());

    let entry = series.last().close;
    let stop = ctx.demand.unwrap().start_price;
    let sizing = PositionSizer::new(1000.0).size(entry, stop, advice.percent);

    assert!(sizing.quantity > 0.0);
    assert!(sizing.risk_dollars > 0.0);
    // Quantity times stop distance recovers the dollar risk (within rounding).
    assert!((sizing.quantity * (entry - stop).abs() - sizing.risk_dollars).abs() < 0.01);
}

#[test]
fn sizing_examples_from_the_contract() {
    let sizer = PositionSizer::new(1000.0);

    let degenerate = sizer.size(100.0, 100.0, 1.0);
    assert_eq!(degenerate.quantity, 0.0);
    assert_eq!(degenerate.risk_dollars, 0.0);

    let normal = sizer.size(110.0, 100.0, 1.0);
    assert_eq!(normal.quantity, 1.0);
    assert_eq!(normal.risk_dollars, 10.0);
}
