//! SwingDesk Core — market-context engine for discretionary swing trading.
//!
//! Pipeline: candle series → indicators → structure analysis
//! (`StructureContext`) → risk advice → position sizing. Everything in the
//! core is a pure, stateless-per-call function over an immutable series;
//! analyses of independent series run concurrently without synchronization.
//!
//! The dashboard, candle retrieval and the optional advisory call are
//! external collaborators; only their contracts live here (`data::provider`,
//! `journal`, `advisory`).

pub mod advisory;
pub mod config;
pub mod data;
pub mod domain;
pub mod indicators;
pub mod journal;
pub mod risk;
pub mod signals;
pub mod structure;

pub use config::AppConfig;
pub use domain::{Bar, CandleSeries, Timeframe};
pub use risk::{PositionSizer, RiskAdvice, RiskAdvisor, RiskFlags, Sizing, TradePlan};
pub use structure::{StructureAnalyzer, StructureContext};
