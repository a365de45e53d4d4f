//! Rule-based risk recommendation.

use crate::structure::{Direction, StructureContext};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskBracket {
    Low,
    Mid,
    High,
}

/// Bounded risk recommendation. `percent` is always within [0.5, 3.0] and
/// monotonically non-decreasing in the underlying score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAdvice {
    pub bracket: RiskBracket,
    pub percent: f64,
    /// Carries the raw score for auditability.
    pub reason: String,
}

/// Trade-level circumstances the context alone cannot know.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskFlags {
    /// The proposed trade direction opposes the higher-timeframe trend.
    pub against_htf: bool,
    /// A news event is imminent.
    pub near_news: bool,
}

/// Deterministic scoring ladder, not a learned model.
///
/// Trending clarity scores above chop, a confirmed break and a reaction zone
/// each add confluence, and the two flags each subtract. Pure and total:
/// every input combination yields a bracket, never an error.
#[derive(Debug, Clone, Copy, Default)]
pub struct RiskAdvisor;

impl RiskAdvisor {
    pub fn new() -> Self {
        Self
    }

    /// Integer score behind the bracket decision.
    pub fn score(&self, context: &StructureContext, flags: RiskFlags) -> i32 {
        let mut score = match context.structure {
            Direction::Up => 2,
            Direction::Down => 0,
            Direction::Range => 1,
        };
        if context.bos.is_some() {
            score += 2;
        }
        if context.has_zone() {
            score += 2;
        }
        if flags.against_htf {
            score -= 2;
        }
        if flags.near_news {
            score -= 2;
        }
        score
    }

    /// Map context + flags to a risk bracket.
    pub fn recommend(&self, context: &StructureContext, flags: RiskFlags) -> RiskAdvice {
        let score = self.score(context, flags);
        let reason = format!("score={score}");
        let (bracket, percent) = if score <= 2 {
            (RiskBracket::Low, 0.5)
        } else if score <= 5 {
            (RiskBracket::Mid, 1.5)
        } else if score <= 7 {
            (RiskBracket::High, 2.0)
        } else {
            (RiskBracket::High, 2.5)
        };
        RiskAdvice {
            bracket,
            percent,
            reason,
        }
    }
}
