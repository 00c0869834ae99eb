//! The closed set of strategies and the ordered collection the engine runs.

use serde::{Deserialize, Serialize};
use signals_core::{
    error::StrategyError,
    traits::{Strategy, StrategyConfig},
    types::{CandleSeries, StrategySignal},
};
use tracing::debug;

use crate::{
    GoldenCrossConfig, GoldenCrossStrategy, MacdMomentumConfig, MacdMomentumStrategy,
    RsiMeanReversionConfig, RsiMeanReversionStrategy, VolumeBreakoutConfig,
    VolumeBreakoutStrategy,
};

/// Every strategy the engine knows about.
///
/// Dispatch is a plain `match`, so adding a strategy means adding a variant
/// here rather than registering a trait object at runtime.
#[derive(Debug, Clone)]
pub enum StrategyKind {
    RsiMeanReversion(RsiMeanReversionStrategy),
    GoldenCross(GoldenCrossStrategy),
    MacdMomentum(MacdMomentumStrategy),
    VolumeBreakout(VolumeBreakoutStrategy),
}

impl StrategyKind {
    /// Registry keys, in evaluation order.
    pub const KEYS: [&'static str; 4] = [
        "rsi_mean_reversion",
        "golden_cross",
        "macd",
        "volume_breakout",
    ];

    /// Create a strategy with its default configuration from a registry key.
    pub fn from_key(key: &str) -> Result<Self, StrategyError> {
        match key {
            "rsi_mean_reversion" => Ok(Self::RsiMeanReversion(Default::default())),
            "golden_cross" => Ok(Self::GoldenCross(Default::default())),
            "macd" => Ok(Self::MacdMomentum(Default::default())),
            "volume_breakout" => Ok(Self::VolumeBreakout(Default::default())),
            _ => Err(StrategyError::NotFound(key.to_string())),
        }
    }

    /// Registry key of this strategy.
    pub fn key(&self) -> &'static str {
        match self {
            Self::RsiMeanReversion(_) => "rsi_mean_reversion",
            Self::GoldenCross(_) => "golden_cross",
            Self::MacdMomentum(_) => "macd",
            Self::VolumeBreakout(_) => "volume_breakout",
        }
    }

    fn inner(&self) -> &dyn Strategy {
        match self {
            Self::RsiMeanReversion(s) => s,
            Self::GoldenCross(s) => s,
            Self::MacdMomentum(s) => s,
            Self::VolumeBreakout(s) => s,
        }
    }
}

impl Strategy for StrategyKind {
    fn name(&self) -> &str {
        self.inner().name()
    }

    fn description(&self) -> &str {
        self.inner().description()
    }

    fn evaluate(&self, series: &CandleSeries) -> StrategySignal {
        match self {
            Self::RsiMeanReversion(s) => s.evaluate(series),
            Self::GoldenCross(s) => s.evaluate(series),
            Self::MacdMomentum(s) => s.evaluate(series),
            Self::VolumeBreakout(s) => s.evaluate(series),
        }
    }

    fn warmup_period(&self) -> usize {
        self.inner().warmup_period()
    }
}

/// Parameters for every strategy in the set.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StrategySetConfig {
    pub rsi_mean_reversion: RsiMeanReversionConfig,
    pub golden_cross: GoldenCrossConfig,
    pub macd: MacdMomentumConfig,
    pub volume_breakout: VolumeBreakoutConfig,
}

impl StrategyConfig for StrategySetConfig {
    fn validate(&self) -> Result<(), StrategyError> {
        self.rsi_mean_reversion.validate()?;
        self.golden_cross.validate()?;
        self.macd.validate()?;
        self.volume_breakout.validate()
    }
}

/// The ordered strategies run on every analysis.
#[derive(Debug, Clone)]
pub struct StrategySet {
    strategies: Vec<StrategyKind>,
}

impl StrategySet {
    /// Build the full set from validated parameters.
    pub fn from_config(config: &StrategySetConfig) -> Result<Self, StrategyError> {
        config.validate()?;
        Ok(Self {
            strategies: vec![
                StrategyKind::RsiMeanReversion(RsiMeanReversionStrategy::new(
                    config.rsi_mean_reversion.clone(),
                )),
                StrategyKind::GoldenCross(GoldenCrossStrategy::new(config.golden_cross.clone())),
                StrategyKind::MacdMomentum(MacdMomentumStrategy::new(config.macd.clone())),
                StrategyKind::VolumeBreakout(VolumeBreakoutStrategy::new(
                    config.volume_breakout.clone(),
                )),
            ],
        })
    }

    /// Get the number of strategies.
    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    /// Check if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }

    /// Longest warmup among the strategies.
    pub fn warmup_period(&self) -> usize {
        self.strategies
            .iter()
            .map(|s| s.warmup_period())
            .max()
            .unwrap_or(0)
    }

    /// Run every strategy on the series. Strategies are independent of each
    /// other; the output keeps the set's order.
    pub fn evaluate(&self, series: &CandleSeries) -> Vec<StrategySignal> {
        self.strategies
            .iter()
            .map(|strategy| {
                let vote = strategy.evaluate(series);
                debug!(
                    symbol = %series.symbol,
                    strategy = %vote.name,
                    signal = %vote.signal,
                    confidence = vote.confidence,
                    reason = %vote.reason,
                    warmed_up = strategy.is_warmed_up(series.len()),
                    "Strategy vote"
                );
                vote
            })
            .collect()
    }
}

impl Default for StrategySet {
    fn default() -> Self {
        Self {
            strategies: StrategyKind::KEYS
                .iter()
                .filter_map(|key| StrategyKind::from_key(key).ok())
                .collect(),
        }
    }
}
