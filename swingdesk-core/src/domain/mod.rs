//! Domain types for SwingDesk.

pub mod bar;
pub mod series;
pub mod timeframe;

pub use bar::Bar;
pub use series::{CandleSeries, SeriesError};
pub use timeframe::{Timeframe, TimeframeError};

/// Symbol type alias
pub type Symbol = String;
