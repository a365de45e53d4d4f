//! Indicator engine — pure, stateless transforms over a candle series.
//!
//! All functions are deterministic given identical input and have no side
//! effects; any number of calls may run concurrently. Output vectors always
//! match the input length, so values line up with bar indices without offset
//! bookkeeping.

pub mod atr;
pub mod ema;
pub mod rsi;
pub mod vwap;

pub use atr::{atr, true_range};
pub use ema::ema;
pub use rsi::rsi;
pub use vwap::anchored_vwap;
