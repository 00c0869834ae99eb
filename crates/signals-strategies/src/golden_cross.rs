//! Golden Cross Strategy.
//!
//! Trend following on a fast and a slow EMA. A fresh crossover between the
//! last two bars votes with higher confidence than an established trend.

use serde::{Deserialize, Serialize};
use signals_core::{
    error::StrategyError,
    traits::{Indicator, Strategy, StrategyConfig},
    types::{CandleSeries, SignalType, StrategySignal},
};
use signals_indicators::Ema;

use crate::round_to;

/// Configuration for the Golden Cross strategy.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GoldenCrossConfig {
    /// Fast EMA period
    pub fast_period: usize,
    /// Slow EMA period
    pub slow_period: usize,
}

impl Default for GoldenCrossConfig {
    fn default() -> Self {
        Self {
            fast_period: 8,
            slow_period: 21,
        }
    }
}

impl StrategyConfig for GoldenCrossConfig {
    fn validate(&self) -> Result<(), StrategyError> {
        if self.fast_period == 0 {
            return Err(StrategyError::InvalidConfig(
                "Fast period must be greater than 0".into(),
            ));
        }
        if self.fast_period >= self.slow_period {
            return Err(StrategyError::InvalidConfig(
                "Fast period must be less than slow period".into(),
            ));
        }
        Ok(())
    }
}

/// EMA crossover strategy.
#[derive(Debug, Clone)]
pub struct GoldenCrossStrategy {
    config: GoldenCrossConfig,
    fast: Ema,
    slow: Ema,
}

impl GoldenCrossStrategy {
    pub const NAME: &'static str = "Golden Cross";

    /// Create a new Golden Cross strategy.
    pub fn new(config: GoldenCrossConfig) -> Self {
        let fast = Ema::new(config.fast_period);
        let slow = Ema::new(config.slow_period);
        Self { config, fast, slow }
    }

    pub fn config(&self) -> &GoldenCrossConfig {
        &self.config
    }

    fn classify(prev_fast: f64, prev_slow: f64, fast: f64, slow: f64) -> (SignalType, f64, &'static str) {
        if prev_fast <= prev_slow && fast > slow {
            (
                SignalType::Long,
                70.0,
                "Golden cross: Fast EMA crossed above Slow EMA",
            )
        } else if prev_fast >= prev_slow && fast < slow {
            (
                SignalType::Short,
                70.0,
                "Death cross: Fast EMA crossed below Slow EMA",
            )
        } else if fast > slow {
            (SignalType::Long, 55.0, "Uptrend: Fast EMA above Slow EMA")
        } else if fast < slow {
            (SignalType::Short, 55.0, "Downtrend: Fast EMA below Slow EMA")
        } else {
            (SignalType::Neutral, 50.0, "No crossover")
        }
    }
}

impl Default for GoldenCrossStrategy {
    fn default() -> Self {
        Self::new(GoldenCrossConfig::default())
    }
}

impl Strategy for GoldenCrossStrategy {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn description(&self) -> &str {
        "Follows fast/slow EMA crossovers and the trend they define"
    }

    fn evaluate(&self, series: &CandleSeries) -> StrategySignal {
        let closes = series.closes();

        let fast = self.fast.calculate(&closes);
        let slow = self.slow.calculate(&closes);

        // A single bar has no previous state, so no crossover is possible
        let (prev_fast, prev_slow) = match closes.split_last() {
            Some((_, previous)) if !previous.is_empty() => {
                (self.fast.calculate(previous), self.slow.calculate(previous))
            }
            _ => (fast, slow),
        };

        let (signal, confidence, reason) = Self::classify(prev_fast, prev_slow, fast, slow);

        StrategySignal::new(Self::NAME, signal, confidence, reason)
            .with_indicator("fast_ema", round_to(fast, 2))
            .with_indicator("slow_ema", round_to(slow, 2))
    }

    fn warmup_period(&self) -> usize {
        self.config.slow_period + 1
    }
}
