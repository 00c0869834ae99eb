//! MACD Momentum Strategy.
//!
//! Votes with the MACD line when the histogram agrees with its sign.

use serde::{Deserialize, Serialize};
use signals_core::{
    error::StrategyError,
    traits::{Indicator, Strategy, StrategyConfig},
    types::{CandleSeries, SignalType, StrategySignal},
};
use signals_indicators::{Macd, MacdOutput};

use crate::round_to;

/// Configuration for the MACD momentum strategy.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MacdMomentumConfig {
    /// Fast EMA period
    pub fast_period: usize,
    /// Slow EMA period
    pub slow_period: usize,
}

impl Default for MacdMomentumConfig {
    fn default() -> Self {
        Self {
            fast_period: 12,
            slow_period: 26,
        }
    }
}

impl StrategyConfig for MacdMomentumConfig {
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

/// MACD momentum strategy.
#[derive(Debug, Clone)]
pub struct MacdMomentumStrategy {
    config: MacdMomentumConfig,
    macd: Macd,
}

impl MacdMomentumStrategy {
    pub const NAME: &'static str = "MACD";

    /// Create a new MACD momentum strategy.
    pub fn new(config: MacdMomentumConfig) -> Self {
        let macd = Macd::with_periods(config.fast_period, config.slow_period);
        Self { config, macd }
    }

    pub fn config(&self) -> &MacdMomentumConfig {
        &self.config
    }

    fn classify(output: &MacdOutput) -> (SignalType, f64, String) {
        let boost = (output.histogram.abs() * 10.0).min(30.0);

        if output.histogram > 0.0 && output.macd > 0.0 {
            (
                SignalType::Long,
                60.0 + boost,
                format!("Bullish MACD: histogram={:.4}", output.histogram),
            )
        } else if output.histogram < 0.0 && output.macd < 0.0 {
            (
                SignalType::Short,
                60.0 + boost,
                format!("Bearish MACD: histogram={:.4}", output.histogram),
            )
        } else {
            (SignalType::Neutral, 50.0, "No clear MACD signal".to_string())
        }
    }
}

impl Default for MacdMomentumStrategy {
    fn default() -> Self {
        Self::new(MacdMomentumConfig::default())
    }
}

impl Strategy for MacdMomentumStrategy {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn description(&self) -> &str {
        "Follows MACD momentum when line and histogram agree"
    }

    fn evaluate(&self, series: &CandleSeries) -> StrategySignal {
        let output = self.macd.calculate(&series.closes());
        let (signal, confidence, reason) = Self::classify(&output);

        StrategySignal::new(Self::NAME, signal, confidence, reason)
            .with_indicator("macd", round_to(output.macd, 4))
            .with_indicator("signal", round_to(output.signal, 4))
            .with_indicator("histogram", round_to(output.histogram, 4))
    }

    fn warmup_period(&self) -> usize {
        self.macd.period()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::series_from_closes;

    fn output(macd: f64) -> MacdOutput {
        let signal = macd * Macd::SIGNAL_RATIO;
        MacdOutput {
            macd,
            signal,
            histogram: macd - signal,
        }
    }

    #[test]
    fn test_config_validation() {
        assert!(MacdMomentumConfig::default().validate().is_ok());
        let config = MacdMomentumConfig {
            fast_period: 26,
            slow_period: 12,
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_confidence_scales_with_histogram() {
        // histogram = 0.1 * macd
        let (signal, confidence, _) = MacdMomentumStrategy::classify(&output(5.0));
        assert_eq!(signal, SignalType::Long);
        assert!((confidence - 65.0).abs() < 1e-9);

        let (signal, confidence, _) = MacdMomentumStrategy::classify(&output(-5.0));
        assert_eq!(signal, SignalType::Short);
        assert!((confidence - 65.0).abs() < 1e-9);
    }

    #[test]
    fn test_confidence_capped() {
        let (_, confidence, _) = MacdMomentumStrategy::classify(&output(1000.0));
        assert_eq!(confidence, 90.0);
    }

    #[test]
    fn test_flat_macd_is_neutral() {
        let (signal, confidence, reason) = MacdMomentumStrategy::classify(&output(0.0));
        assert_eq!(signal, SignalType::Neutral);
        assert_eq!(confidence, 50.0);
        assert_eq!(reason, "No clear MACD signal");
    }

    #[test]
    fn test_uptrend_is_long() {
        let closes: Vec<f64> = (0..60).map(|i| 100.0 + i as f64 * 2.0).collect();
        let signal = MacdMomentumStrategy::default().evaluate(&series_from_closes(&closes));

        assert_eq!(signal.signal, SignalType::Long);
        assert!(signal.confidence > 60.0 && signal.confidence <= 90.0);
        assert!(signal.indicator("histogram").unwrap() > 0.0);
    }

    #[test]
    fn test_short_history_is_neutral() {
        let closes: Vec<f64> = (0..10).map(|i| 100.0 + i as f64).collect();
        let signal = MacdMomentumStrategy::default().evaluate(&series_from_closes(&closes));

        assert_eq!(signal.signal, SignalType::Neutral);
        assert_eq!(signal.indicator("macd"), Some(0.0));
    }
}
