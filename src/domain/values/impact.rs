use crate::domain::values::sentiment::Sentiment;
use serde::{Deserialize, Serialize};
use std::fmt;

const SYMBOL_BONUS_STEP: f64 = 0.1;
const SYMBOL_BONUS_CAP: f64 = 0.3;

/// Bounded relevance estimate in `[0.0, 1.0]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImpactScore(f64);

impl ImpactScore {
    /// Combine polarity and the number of mentioned symbols.
    ///
    /// Base by sentiment (positive 0.7, negative 0.6, neutral 0.5) plus 0.1 per
    /// symbol capped at 0.3, clamped to 1.0. Rounded to cents so that
    /// `0.7 + 0.1` compares equal to `0.8`.
    pub fn from_signals(sentiment: Sentiment, symbol_count: usize) -> Self {
        let base = match sentiment {
            Sentiment::Positive => 0.7,
            Sentiment::Negative => 0.6,
            Sentiment::Neutral => 0.5,
        };
        let bonus = (symbol_count as f64 * SYMBOL_BONUS_STEP).min(SYMBOL_BONUS_CAP);
        let raw = (base + bonus).min(1.0);
        ImpactScore((raw * 100.0).round() / 100.0)
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for ImpactScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl Default for ImpactScore {
    fn default() -> Self {
        ImpactScore(0.5)
    }
}
