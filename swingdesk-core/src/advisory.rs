//! Optional advisory hints.
//!
//! An advisory provider (a language model behind an HTTP API, typically) may
//! look at a serialized `StructureContext` and offer a free-form suggestion.
//! The hint is advisory-only: the core never requires one, never blocks on
//! one, and never lets one override the rule-based risk advice.

use crate::structure::StructureContext;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AdvisoryError {
    #[error("advisory provider unavailable: {0}")]
    Unavailable(String),

    #[error("advisory response malformed: {0}")]
    Malformed(String),
}

/// Free-form suggestion returned by an advisory provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdvisoryHint {
    /// Suggested bias: "up", "down" or "range".
    pub bias: String,
    pub entry_hint: String,
    pub stop_hint: String,
    /// Suggested bucket: "low", "mid" or "high".
    pub risk_bucket: String,
    pub why: String,
}

/// Trait for advisory providers.
///
/// `Ok(None)` means "no opinion" and is always acceptable; callers proceed
/// with the rule-based advice either way.
pub trait AdvisoryProvider {
    fn suggest(&self, context: &StructureContext) -> Result<Option<AdvisoryHint>, AdvisoryError>;
}

/// The default provider: no advisory configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoAdvisory;

impl AdvisoryProvider for NoAdvisory {
    fn suggest(&self, _context: &StructureContext) -> Result<Option<AdvisoryHint>, AdvisoryError> {
        Ok(None)
    }
}

/// Serialize a context into the JSON payload advisory providers receive.
pub fn context_payload(context: &StructureContext) -> String {
    serde_json::to_string(context).expect("context serialization cannot fail")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structure::Direction;

    fn sample_context() -> StructureContext {
        StructureContext {
            structure: Direction::Range,
            bos: None,
            demand: None,
            supply: None,
            ema21: 100.0,
            ema50: 100.0,
            ema100: 100.0,
            atr14: 1.0,
        }
    }

    #[test]
    fn no_advisory_has_no_opinion() {
        let hint = NoAdvisory.suggest(&sample_context()).unwrap();
        assert!(hint.is_none());
    }

    #[test]
    fn payload_is_valid_json() {
        let payload = context_payload(&sample_context());
        let value: serde_json::Value = serde_json::from_str(&payload).unwrap();
        assert_eq!(value["structure"], "range");
    }
}
