//! Data boundary: supply contract, CSV ingest, synthetic candles.

pub mod ingest;
pub mod provider;
pub mod synthetic;

pub use ingest::{load_candles_csv, IngestError};
pub use provider::{default_fetch_limit, recommended_min_bars, CandleProvider, DataError};
pub use synthetic::{synthetic_series, SyntheticConfig};
