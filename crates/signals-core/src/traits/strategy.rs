//! Strategy trait definitions.

use crate::error::StrategyError;
use crate::types::{CandleSeries, StrategySignal};

/// Configuration trait for strategies.
pub trait StrategyConfig: Send + Sync + Clone + 'static {
    /// Validate the configuration.
    fn validate(&self) -> Result<(), StrategyError>;
}

/// Core strategy trait.
///
/// A strategy is a pure classifier: it reads the whole candle history and
/// casts one directional vote with a confidence and a rationale. It holds
/// no state between calls, so one instance can serve any number of symbols
/// concurrently.
pub trait Strategy: Send + Sync {
    /// Get the unique name of this strategy.
    ///
    /// This is also the key looked up in the engine's weight table.
    fn name(&self) -> &str;

    /// Analyze the series and cast a vote.
    ///
    /// Must never fail for a non-empty series; short histories produce
    /// a neutral or fallback-based vote instead.
    fn evaluate(&self, series: &CandleSeries) -> StrategySignal;

    /// Get the number of candles needed before every indicator leaves its fallback.
    fn warmup_period(&self) -> usize;

    /// Check if the strategy has enough data to use real indicator values.
    fn is_warmed_up(&self, bars_available: usize) -> bool {
        bars_available >= self.warmup_period()
    }

    /// Get a description of the strategy.
    fn description(&self) -> &str {
        ""
    }
}
