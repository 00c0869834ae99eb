//! Confidence-weighted vote aggregation.

use serde::{Deserialize, Serialize};
use signals_core::types::{SignalType, StrategySignal, NEUTRAL_CONFIDENCE};
use tracing::warn;

use crate::WeightTable;

const STRONG_THRESHOLD: f64 = 1.5;
const THRESHOLD: f64 = 0.5;

/// Weighted averages over all strategy votes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aggregate {
    /// Weighted average of `value * confidence / 100`, in [-2, 2]
    pub avg_signal: f64,
    /// Weighted average confidence, in [0, 100]
    pub avg_confidence: f64,
    /// Sum of the weights used
    pub total_weight: f64,
}

impl Aggregate {
    /// Final discretized signal for this aggregate.
    pub fn signal(&self) -> SignalType {
        discretize(self.avg_signal)
    }
}

/// Combine strategy votes with the given weights.
///
/// Each vote contributes `value * weight * confidence / 100` to the signal
/// sum and `confidence * weight` to the confidence sum; both are divided by
/// the total weight. With a zero total weight the result is a neutral
/// signal (0.0) with confidence 50.
pub fn aggregate(signals: &[StrategySignal], weights: &WeightTable) -> Aggregate {
    let mut total_weight = 0.0;
    let mut weighted_signal = 0.0;
    let mut weighted_confidence = 0.0;

    for vote in signals {
        let weight = weights.weight_for(&vote.name);
        weighted_signal += f64::from(vote.signal.value()) * weight * (vote.confidence / 100.0);
        weighted_confidence += vote.confidence * weight;
        total_weight += weight;
    }

    if total_weight > 0.0 && total_weight.is_finite() {
        Aggregate {
            avg_signal: weighted_signal / total_weight,
            avg_confidence: weighted_confidence / total_weight,
            total_weight,
        }
    } else {
        warn!(
            total_weight,
            strategies = signals.len(),
            "No usable strategy weight, falling back to neutral"
        );
        Aggregate {
            avg_signal: 0.0,
            avg_confidence: NEUTRAL_CONFIDENCE,
            total_weight,
        }
    }
}

/// Map an average vote onto the five-level scale.
///
/// Thresholds are symmetric: ±1.5 for the strong signals, ±0.5 for the
/// plain ones.
pub fn discretize(avg_signal: f64) -> SignalType {
    if avg_signal >= STRONG_THRESHOLD {
        SignalType::StrongLong
    } else if avg_signal >= THRESHOLD {
        SignalType::Long
    } else if avg_signal <= -STRONG_THRESHOLD {
        SignalType::StrongShort
    } else if avg_signal <= -THRESHOLD {
        SignalType::Short
    } else {
        SignalType::Neutral
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vote(name: &str, signal: SignalType, confidence: f64) -> StrategySignal {
        StrategySignal::new(name, signal, confidence, "")
    }

    fn mixed_votes() -> Vec<StrategySignal> {
        vec![
            vote("RSI Mean Reversion", SignalType::Long, 70.0),
            vote("Golden Cross", SignalType::Long, 55.0),
            vote("MACD", SignalType::Neutral, 50.0),
            vote("Volume Breakout", SignalType::Short, 50.0),
        ]
    }

    #[test]
    fn test_mixed_votes_uniform_weights() {
        let result = aggregate(&mixed_votes(), &WeightTable::default());

        // (0.70 + 0.55 + 0 - 0.50) / 4
        assert!((result.avg_signal - 0.1875).abs() < 1e-12);
        // (70 + 55 + 50 + 50) / 4
        assert!((result.avg_confidence - 56.25).abs() < 1e-12);
        assert_eq!(result.total_weight, 4.0);
        assert_eq!(result.signal(), SignalType::Neutral);
    }

    #[test]
    fn test_weights_shift_the_result() {
        let weights = WeightTable::new(HashMap::from([
            ("RSI Mean Reversion".to_string(), 3.0),
            ("Volume Breakout".to_string(), 0.0),
        ]))
        .unwrap();
        let result = aggregate(&mixed_votes(), &weights);

        // (3 * 0.70 + 0.55 + 0) / 5
        assert!((result.avg_signal - 0.53).abs() < 1e-12);
        // (3 * 70 + 55 + 50) / 5
        assert!((result.avg_confidence - 63.0).abs() < 1e-12);
        assert_eq!(result.signal(), SignalType::Long);
    }

    #[test]
    fn test_zero_total_weight() {
        let weights = WeightTable::new(
            mixed_votes()
                .iter()
                .map(|v| (v.name.clone(), 0.0))
                .collect(),
        )
        .unwrap();
        let result = aggregate(&mixed_votes(), &weights);

        assert_eq!(result.avg_signal, 0.0);
        assert_eq!(result.avg_confidence, 50.0);
        assert_eq!(result.signal(), SignalType::Neutral);
    }

    #[test]
    fn test_no_votes() {
        let result = aggregate(&[], &WeightTable::default());
        assert_eq!(result.avg_confidence, 50.0);
        assert_eq!(result.signal(), SignalType::Neutral);
    }

    #[test]
    fn test_zero_confidence_gives_zero() {
        let votes = vec![
            vote("A", SignalType::StrongLong, 0.0),
            vote("B", SignalType::Short, 0.0),
        ];
        let result = aggregate(&votes, &WeightTable::default());

        assert_eq!(result.avg_confidence, 0.0);
        assert_eq!(result.avg_signal, 0.0);
    }

    #[test]
    fn test_unanimous_strong_votes() {
        let votes = vec![
            vote("A", SignalType::StrongShort, 100.0),
            vote("B", SignalType::StrongShort, 90.0),
        ];
        let result = aggregate(&votes, &WeightTable::default());

        assert!((result.avg_signal + 1.9).abs() < 1e-12);
        assert_eq!(result.signal(), SignalType::StrongShort);
    }

    #[test]
    fn test_discretize_thresholds() {
        assert_eq!(discretize(2.0), SignalType::StrongLong);
        assert_eq!(discretize(1.5), SignalType::StrongLong);
        assert_eq!(discretize(1.49), SignalType::Long);
        assert_eq!(discretize(0.5), SignalType::Long);
        assert_eq!(discretize(0.49), SignalType::Neutral);
        assert_eq!(discretize(0.0), SignalType::Neutral);
        assert_eq!(discretize(-0.49), SignalType::Neutral);
        assert_eq!(discretize(-0.5), SignalType::Short);
        assert_eq!(discretize(-1.49), SignalType::Short);
        assert_eq!(discretize(-1.5), SignalType::StrongShort);
        assert_eq!(discretize(-2.0), SignalType::StrongShort);
    }

    #[test]
    fn test_discretize_monotonic() {
        let mut previous = discretize(-3.0);
        for step in -300..=300 {
            let current = discretize(step as f64 / 100.0);
            assert!(current.value() >= previous.value(), "decreased at {}", step);
            previous = current;
        }
    }
}
