//! Analyst sentiment models.

use serde::{Deserialize, Serialize};

/// Direction of the external analyst signal for a symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TrendDirection {
    Up,
    Down,
    Sideways,
}

/// A directional trend signal with its strength and provenance.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendSignal {
    pub symbol: String,
    pub direction: TrendDirection,
    /// |bullish - bearish| / total ratings, in [0, 1].
    pub confidence: f64,
    pub source: String,
}

impl TrendSignal {
    /// The no-information signal used when every lookup path has failed.
    pub fn neutral(symbol: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            direction: TrendDirection::Sideways,
            confidence: 0.0,
            source: source.into(),
        }
    }
}
