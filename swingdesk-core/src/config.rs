//! Application configuration.
//!
//! One explicit struct threaded through construction — no module-level
//! globals. Loadable from TOML; the defaults mirror the stock setup (five
//! USDT pairs, $100 capital, risk steps up to 3%).

use crate::domain::Timeframe;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub symbols: Vec<String>,
    pub base_capital: f64,
    /// Selectable risk percentages, ascending.
    pub risk_steps: Vec<f64>,
    pub min_rr: f64,
    pub default_timeframe: Timeframe,
    /// Market-data cache TTL for the retrieval collaborator.
    pub cache_ttl_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            symbols: ["BTCUSDT", "ETHUSDT", "BNBUSDT", "SOLUSDT", "XRPUSDT"]
                .map(String::from)
                .to_vec(),
            base_capital: 100.0,
            risk_steps: vec![0.5, 1.0, 1.5, 2.0, 2.5, 3.0],
            min_rr: 1.5,
            default_timeframe: Timeframe::H4,
            cache_ttl_secs: 60,
        }
    }
}

impl AppConfig {
    /// Load from a TOML file, falling back to defaults for omitted keys.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config: AppConfig = toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.base_capital <= 0.0 {
            return Err(ConfigError::Invalid("base_capital must be positive".into()));
        }
        if self.risk_steps.is_empty() {
            return Err(ConfigError::Invalid("risk_steps must not be empty".into()));
        }
        if self.risk_steps.windows(2).any(|w| w[0] >= w[1]) {
            return Err(ConfigError::Invalid(
                "risk_steps must be strictly ascending".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_stock_setup() {
        let config = AppConfig::default();
        assert_eq!(config.symbols.len(), 5);
        assert_eq!(config.base_capital, 100.0);
        assert_eq!(config.min_rr, 1.5);
        assert_eq!(config.default_timeframe, Timeframe::H4);
        assert_eq!(*config.risk_steps.last().unwrap(), 3.0);
    }

    #[test]
    fn parses_partial_toml() {
        let config: AppConfig = toml::from_str(
            r#"
            base_capital = 2500.0
            default_timeframe = "D1"
            "#,
        )
        .unwrap();
        assert_eq!(config.base_capital, 2500.0);
        assert_eq!(config.default_timeframe, Timeframe::D1);
        // Omitted keys fall back to defaults.
        assert_eq!(config.min_rr, 1.5);
    }

    #[test]
    fn rejects_descending_risk_steps() {
        let config = AppConfig {
            risk_steps: vec![2.0, 1.0],
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
