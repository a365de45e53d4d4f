//! Risk advice, position sizing and trade planning.
//!
//! The advisor consumes a `StructureContext` plus two trade-level flags and
//! emits a bounded risk bracket; the sizer turns that bracket into a quantity
//! against fixed capital. Both are pure and total — degenerate inputs resolve
//! to documented fallbacks, never errors.

pub mod advisor;
pub mod plan;
pub mod sizer;

pub use advisor::{RiskAdvice, RiskAdvisor, RiskBracket, RiskFlags};
pub use plan::{rr_targets, TradeDirection, TradePlan, DEFAULT_RR_MULTIPLES};
pub use sizer::{PositionSizer, Sizing};
