//! Composite result of an analysis and its alert projection.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{SignalType, StrategySignal};

/// Combined signal from all strategies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompositeSignal {
    /// Symbol identifier
    pub symbol: String,
    /// Last close used by the computation
    pub price: f64,
    /// Final discretized signal
    pub signal: SignalType,
    /// Weighted average confidence
    pub confidence: f64,
    /// Per-strategy breakdown, in evaluation order
    pub strategies: Vec<StrategySignal>,
    /// When the analysis ran
    pub timestamp: DateTime<Utc>,
}

impl CompositeSignal {
    /// Check whether the final signal calls for action.
    pub fn is_actionable(&self) -> bool {
        !self.signal.is_neutral()
    }

    /// Strategies that cast a non-neutral vote.
    pub fn voting_strategies(&self) -> impl Iterator<Item = &StrategySignal> {
        self.strategies.iter().filter(|s| !s.signal.is_neutral())
    }

    /// Strategies whose vote points the same way as the final signal.
    pub fn agreeing_strategies(&self) -> impl Iterator<Item = &StrategySignal> {
        let direction = self.signal.value().signum();
        self.strategies
            .iter()
            .filter(move |s| direction != 0 && s.signal.value().signum() == direction)
    }

    /// Project into the flat record consumed by alert delivery.
    pub fn to_alert(&self) -> AlertRecord {
        AlertRecord {
            symbol: self.symbol.clone(),
            side: self.signal.label().to_string(),
            price: self.price,
            confidence: self.confidence.round_ties_even() as i64,
            strategy: self
                .voting_strategies()
                .map(|s| s.name.as_str())
                .collect::<Vec<_>>()
                .join(", "),
            rsi: self.strategies.iter().find_map(|s| s.indicator("rsi")),
        }
    }
}

/// Flat alert record handed to delivery channels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertRecord {
    pub symbol: String,
    /// "STRONG BUY", "BUY", "HOLD", "SELL" or "STRONG SELL"
    pub side: String,
    pub price: f64,
    pub confidence: i64,
    /// Comma-joined names of strategies with a non-neutral vote
    pub strategy: String,
    pub rsi: Option<f64>,
}
