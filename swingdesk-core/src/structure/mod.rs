//! Market-structure analysis.
//!
//! Consumes a validated candle series and derives swing points, structure
//! direction, break-of-structure events, supply/demand zones and the
//! higher-timeframe trend. Everything here is a pure read of the series plus
//! indicator columns computed once at construction.

pub mod analyzer;
pub mod context;
pub mod swing;
pub mod zone;

pub use analyzer::{StructureAnalyzer, DEFAULT_BARS_BACK, MIN_BARS};
pub use context::{Bos, BosDirection, Direction, StructureContext};
pub use swing::{find_swings, SwingKind, SwingPoint, DEFAULT_LOOKBACK};
pub use zone::{Zone, ZoneKind};
