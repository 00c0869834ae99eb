//! Signal scale and per-strategy votes.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Five-level directional scale.
///
/// Variants are declared in numeric order so the derived `Ord` matches
/// `value()`; the aggregator relies on both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(i8)]
pub enum SignalType {
    StrongShort = -2,
    Short = -1,
    Neutral = 0,
    Long = 1,
    StrongLong = 2,
}

impl SignalType {
    /// Integer value used in weighted summation.
    #[inline]
    pub fn value(self) -> i8 {
        self as i8
    }

    /// Side label used by alert consumers.
    pub fn label(self) -> &'static str {
        match self {
            SignalType::StrongLong => "STRONG BUY",
            SignalType::Long => "BUY",
            SignalType::Neutral => "HOLD",
            SignalType::Short => "SELL",
            SignalType::StrongShort => "STRONG SELL",
        }
    }

    /// Check if this is a neutral vote.
    pub fn is_neutral(self) -> bool {
        self == SignalType::Neutral
    }
}

impl fmt::Display for SignalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SignalType::StrongShort => "STRONG_SHORT",
            SignalType::Short => "SHORT",
            SignalType::Neutral => "NEUTRAL",
            SignalType::Long => "LONG",
            SignalType::StrongLong => "STRONG_LONG",
        };
        f.write_str(name)
    }
}

/// Neutral confidence, also used in place of a non-finite score.
pub const NEUTRAL_CONFIDENCE: f64 = 50.0;

/// Result of one strategy's analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategySignal {
    /// Strategy name (also the weight-table key)
    pub name: String,
    /// Directional vote
    pub signal: SignalType,
    /// Confidence in [0, 100]
    pub confidence: f64,
    /// Latest indicator values, for display only
    pub indicators: BTreeMap<String, f64>,
    /// Human-readable rationale
    pub reason: String,
}

impl StrategySignal {
    /// Create a strategy signal. Confidence is clamped into [0, 100];
    /// NaN or infinite scores become the neutral 50.
    pub fn new(
        name: impl Into<String>,
        signal: SignalType,
        confidence: f64,
        reason: impl Into<String>,
    ) -> Self {
        let confidence = if !confidence.is_finite() {
            NEUTRAL_CONFIDENCE
        } else {
            confidence.clamp(0.0, 100.0)
        };
        Self {
            name: name.into(),
            signal,
            confidence,
            indicators: BTreeMap::new(),
            reason: reason.into(),
        }
    }

    /// A neutral vote with the default confidence.
    pub fn neutral(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::new(name, SignalType::Neutral, NEUTRAL_CONFIDENCE, reason)
    }

    /// Attach an indicator value.
    pub fn with_indicator(mut self, key: impl Into<String>, value: f64) -> Self {
        self.indicators.insert(key.into(), value);
        self
    }

    /// Look up an indicator value.
    pub fn indicator(&self, key: &str) -> Option<f64> {
        self.indicators.get(key).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signal_ordering_matches_value() {
        let scale = [
            SignalType::StrongShort,
            SignalType::Short,
            SignalType::Neutral,
            SignalType::Long,
            SignalType::StrongLong,
        ];
        for pair in scale.windows(2) {
            assert!(pair[0] < pair[1]);
            assert!(pair[0].value() < pair[1].value());
        }
        assert_eq!(SignalType::StrongShort.value(), -2);
        assert_eq!(SignalType::StrongLong.value(), 2);
    }

    #[test]
    fn test_labels() {
        assert_eq!(SignalType::StrongLong.label(), "STRONG BUY");
        assert_eq!(SignalType::Neutral.label(), "HOLD");
        assert_eq!(SignalType::StrongShort.label(), "STRONG SELL");
        assert_eq!(SignalType::Short.to_string(), "SHORT");
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&SignalType::StrongLong).unwrap();
        assert_eq!(json, "\"STRONG_LONG\"");
        let parsed: SignalType = serde_json::from_str("\"SHORT\"").unwrap();
        assert_eq!(parsed, SignalType::Short);
    }

    #[test]
    fn test_confidence_clamped() {
        let high = StrategySignal::new("test", SignalType::Long, 130.0, "");
        assert_eq!(high.confidence, 100.0);

        let low = StrategySignal::new("test", SignalType::Short, -5.0, "");
        assert_eq!(low.confidence, 0.0);

        let nan = StrategySignal::new("test", SignalType::Short, f64::NAN, "");
        assert_eq!(nan.confidence, NEUTRAL_CONFIDENCE);

        let inf = StrategySignal::new("test", SignalType::Long, f64::INFINITY, "");
        assert_eq!(inf.confidence, NEUTRAL_CONFIDENCE);
    }

    #[test]
    fn test_indicators() {
        let signal = StrategySignal::neutral("test", "nothing").with_indicator("rsi", 42.0);
        assert_eq!(signal.indicator("rsi"), Some(42.0));
        assert_eq!(signal.indicator("macd"), None);
        assert_eq!(signal.confidence, 50.0);
    }
}
