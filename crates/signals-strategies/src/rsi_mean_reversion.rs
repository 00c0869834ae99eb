//! RSI Mean Reversion Strategy.
//!
//! Combines RSI with Bollinger Bands: a low RSI with price under the bands
//! is read as oversold (expect a bounce), a high RSI with price over the
//! bands as overbought (expect a pullback).

use serde::{Deserialize, Serialize};
use signals_core::{
    error::StrategyError,
    traits::{Indicator, Strategy, StrategyConfig},
    types::{CandleSeries, SignalType, StrategySignal},
};
use signals_indicators::{BollingerBands, BollingerOutput, Rsi};

use crate::round_to;

/// Configuration for the RSI mean reversion strategy.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RsiMeanReversionConfig {
    /// RSI calculation period
    pub rsi_period: usize,
    /// Bollinger Bands window
    pub bb_period: usize,
    /// Bollinger Bands standard deviation multiplier
    pub bb_std_multiplier: f64,
}

impl Default for RsiMeanReversionConfig {
    fn default() -> Self {
        Self {
            rsi_period: 14,
            bb_period: 20,
            bb_std_multiplier: 2.0,
        }
    }
}

impl StrategyConfig for RsiMeanReversionConfig {
    fn validate(&self) -> Result<(), StrategyError> {
        if self.rsi_period < 2 {
            return Err(StrategyError::InvalidConfig(
                "RSI period must be at least 2".into(),
            ));
        }
        if self.bb_period < 2 {
            return Err(StrategyError::InvalidConfig(
                "Bollinger period must be at least 2".into(),
            ));
        }
        if !(self.bb_std_multiplier.is_finite() && self.bb_std_multiplier > 0.0) {
            return Err(StrategyError::InvalidConfig(
                "Bollinger multiplier must be positive".into(),
            ));
        }
        Ok(())
    }
}

/// RSI + Bollinger Bands mean reversion strategy.
#[derive(Debug, Clone)]
pub struct RsiMeanReversionStrategy {
    config: RsiMeanReversionConfig,
    rsi: Rsi,
    bands: BollingerBands,
}

impl RsiMeanReversionStrategy {
    pub const NAME: &'static str = "RSI Mean Reversion";

    /// Create a new RSI mean reversion strategy.
    pub fn new(config: RsiMeanReversionConfig) -> Self {
        let rsi = Rsi::new(config.rsi_period);
        let bands = BollingerBands::with_params(config.bb_period, config.bb_std_multiplier);
        Self { config, rsi, bands }
    }

    pub fn config(&self) -> &RsiMeanReversionConfig {
        &self.config
    }

    /// Classify an RSI reading against the bands. First match wins.
    fn classify(rsi: f64, price: f64, bands: &BollingerOutput) -> (SignalType, f64, String) {
        if rsi < 30.0 && bands.is_oversold(price) {
            (
                SignalType::StrongLong,
                80.0 + (30.0 - rsi),
                format!("Oversold: RSI={:.1}, price below lower BB", rsi),
            )
        } else if rsi < 35.0 && bands.is_below_middle(price) {
            (
                SignalType::Long,
                60.0 + (35.0 - rsi),
                format!("Near oversold: RSI={:.1}", rsi),
            )
        } else if rsi > 70.0 && bands.is_overbought(price) {
            (
                SignalType::StrongShort,
                80.0 + (rsi - 70.0),
                format!("Overbought: RSI={:.1}, price above upper BB", rsi),
            )
        } else if rsi > 65.0 && bands.is_above_middle(price) {
            (
                SignalType::Short,
                60.0 + (rsi - 65.0),
                format!("Near overbought: RSI={:.1}", rsi),
            )
        } else {
            (SignalType::Neutral, 50.0, "No clear signal".to_string())
        }
    }
}

impl Default for RsiMeanReversionStrategy {
    fn default() -> Self {
        Self::new(RsiMeanReversionConfig::default())
    }
}

impl Strategy for RsiMeanReversionStrategy {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn description(&self) -> &str {
        "Fades RSI extremes confirmed by price outside the Bollinger Bands"
    }

    fn evaluate(&self, series: &CandleSeries) -> StrategySignal {
        let closes = series.closes();
        let price = series.last_close();

        let rsi = self.rsi.calculate(&closes);
        let bands = self.bands.calculate(&closes);

        let (signal, confidence, reason) = Self::classify(rsi, price, &bands);

        StrategySignal::new(Self::NAME, signal, confidence, reason)
            .with_indicator("rsi", round_to(rsi, 2))
            .with_indicator("bb_lower", bands.lower)
            .with_indicator("bb_upper", bands.upper)
    }

    fn warmup_period(&self) -> usize {
        self.rsi.period().max(self.bands.period())
    }
}
