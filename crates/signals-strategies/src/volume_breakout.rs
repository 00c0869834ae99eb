//! Volume Breakout Strategy.
//!
//! A volume spike on a meaningful price move is read as a breakout in the
//! direction of the move.

use serde::{Deserialize, Serialize};
use signals_core::{
    error::StrategyError,
    traits::{Indicator, Strategy, StrategyConfig},
    types::{CandleSeries, SignalType, StrategySignal},
};
use signals_indicators::{price_change, VolumeRatio};

use crate::round_to;

/// Configuration for the volume breakout strategy.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VolumeBreakoutConfig {
    /// Bars compared, including the current one
    pub lookback: usize,
}

impl Default for VolumeBreakoutConfig {
    fn default() -> Self {
        Self { lookback: 20 }
    }
}

impl StrategyConfig for VolumeBreakoutConfig {
    fn validate(&self) -> Result<(), StrategyError> {
        if self.lookback < 2 {
            return Err(StrategyError::InvalidConfig(
                "Volume lookback must be at least 2".into(),
            ));
        }
        Ok(())
    }
}

/// Volume-based breakout detection.
#[derive(Debug, Clone)]
pub struct VolumeBreakoutStrategy {
    config: VolumeBreakoutConfig,
    ratio: VolumeRatio,
}

impl VolumeBreakoutStrategy {
    pub const NAME: &'static str = "Volume Breakout";

    /// Create a new volume breakout strategy.
    pub fn new(config: VolumeBreakoutConfig) -> Self {
        let ratio = VolumeRatio::new(config.lookback);
        Self { config, ratio }
    }

    pub fn config(&self) -> &VolumeBreakoutConfig {
        &self.config
    }

    fn classify(vol_ratio: f64, change: f64) -> (SignalType, f64, String) {
        let boost = (vol_ratio * 5.0).min(20.0);

        if vol_ratio > 2.0 && change > 0.01 {
            (
                SignalType::StrongLong,
                75.0 + boost,
                format!(
                    "Volume breakout UP: {:.1}x avg vol, +{:.1}%",
                    vol_ratio,
                    change * 100.0
                ),
            )
        } else if vol_ratio > 1.5 && change > 0.005 {
            (
                SignalType::Long,
                60.0 + boost,
                format!("High volume UP: {:.1}x avg vol", vol_ratio),
            )
        } else if vol_ratio > 2.0 && change < -0.01 {
            (
                SignalType::StrongShort,
                75.0 + boost,
                format!(
                    "Volume breakdown: {:.1}x avg vol, {:.1}%",
                    vol_ratio,
                    change * 100.0
                ),
            )
        } else if vol_ratio > 1.5 && change < -0.005 {
            (
                SignalType::Short,
                60.0 + boost,
                format!("High volume DOWN: {:.1}x avg vol", vol_ratio),
            )
        } else {
            (SignalType::Neutral, 50.0, "Normal volume".to_string())
        }
    }
}

impl Default for VolumeBreakoutStrategy {
    fn default() -> Self {
        Self::new(VolumeBreakoutConfig::default())
    }
}

impl Strategy for VolumeBreakoutStrategy {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn description(&self) -> &str {
        "Detects volume spikes that confirm a price breakout or breakdown"
    }

    fn evaluate(&self, series: &CandleSeries) -> StrategySignal {
        let volumes = series.volumes();
        if !self.ratio.has_enough_data(&volumes) {
            return StrategySignal::neutral(Self::NAME, "Not enough data");
        }

        let vol_ratio = self.ratio.calculate(&volumes);
        let change = price_change(&series.closes());
        let (signal, confidence, reason) = Self::classify(vol_ratio, change);

        StrategySignal::new(Self::NAME, signal, confidence, reason)
            .with_indicator("vol_ratio", round_to(vol_ratio, 2))
            .with_indicator("price_change", round_to(change * 100.0, 2))
    }

    fn warmup_period(&self) -> usize {
        self.ratio.period()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::series_from_closes_and_volumes;

    fn breakout_series(last_volume: f64, last_close: f64) -> CandleSeries {
        let mut closes = vec![100.0; 24];
        closes.push(last_close);
        let mut volumes = vec![1000.0; 24];
        volumes.push(last_volume);
        series_from_closes_and_volumes(&closes, &volumes)
    }

    #[test]
    fn test_config_validation() {
        assert!(VolumeBreakoutConfig::default().validate().is_ok());
        assert!(VolumeBreakoutConfig { lookback: 1 }.validate().is_err());
    }

    #[test]
    fn test_not_enough_data() {
        let closes = vec![100.0; 19];
        let volumes = vec![1000.0; 19];
        let signal = VolumeBreakoutStrategy::default()
            .evaluate(&series_from_closes_and_volumes(&closes, &volumes));

        assert_eq!(signal.signal, SignalType::Neutral);
        assert_eq!(signal.confidence, 50.0);
        assert_eq!(signal.reason, "Not enough data");
        assert!(signal.indicators.is_empty());
    }

    #[test]
    fn test_strong_breakout_up() {
        // 3x volume, +2%
        let signal = VolumeBreakoutStrategy::default().evaluate(&breakout_series(3000.0, 102.0));

        assert_eq!(signal.signal, SignalType::StrongLong);
        assert!(signal.confidence >= 75.0);
        assert!((signal.confidence - 90.0).abs() < 1e-9);
        assert_eq!(signal.indicator("vol_ratio"), Some(3.0));
        assert_eq!(signal.indicator("price_change"), Some(2.0));
    }

    #[test]
    fn test_moderate_breakout_up() {
        // 1.6x volume, +0.8%
        let signal = VolumeBreakoutStrategy::default().evaluate(&breakout_series(1600.0, 100.8));

        assert_eq!(signal.signal, SignalType::Long);
        assert!((signal.confidence - 68.0).abs() < 1e-9);
    }

    #[test]
    fn test_breakdowns() {
        let signal = VolumeBreakoutStrategy::default().evaluate(&breakout_series(5000.0, 97.0));
        assert_eq!(signal.signal, SignalType::StrongShort);
        // boost capped at 20
        assert!((signal.confidence - 95.0).abs() < 1e-9);

        let signal = VolumeBreakoutStrategy::default().evaluate(&breakout_series(1800.0, 99.3));
        assert_eq!(signal.signal, SignalType::Short);
        assert!((signal.confidence - 69.0).abs() < 1e-9);
    }

    #[test]
    fn test_spike_without_move_is_neutral() {
        let signal = VolumeBreakoutStrategy::default().evaluate(&breakout_series(4000.0, 100.2));
        assert_eq!(signal.signal, SignalType::Neutral);
        assert_eq!(signal.reason, "Normal volume");
    }

    #[test]
    fn test_zero_volume_history() {
        let mut closes = vec![100.0; 19];
        closes.push(105.0);
        let mut volumes = vec![0.0; 19];
        volumes.push(500.0);
        let signal = VolumeBreakoutStrategy::default()
            .evaluate(&series_from_closes_and_volumes(&closes, &volumes));

        // Ratio falls back to 1.0, no NaN or Inf
        assert_eq!(signal.indicator("vol_ratio"), Some(1.0));
        assert_eq!(signal.signal, SignalType::Neutral);
    }
}
