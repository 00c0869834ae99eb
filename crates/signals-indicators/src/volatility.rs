//! Volatility indicators.

use serde::{Deserialize, Serialize};
use signals_core::traits::Indicator;

/// Population standard deviation of the trailing window.
#[derive(Debug, Clone)]
pub struct StdDev {
    period: usize,
}

impl StdDev {
    /// Create a new standard deviation indicator.
    pub fn new(period: usize) -> Self {
        assert!(period > 0, "Period must be greater than 0");
        Self { period }
    }

    /// Mean and population standard deviation of a window.
    fn mean_and_std(window: &[f64]) -> (f64, f64) {
        let len = window.len() as f64;
        let mean: f64 = window.iter().sum::<f64>() / len;
        let variance: f64 = window.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / len;
        (mean, variance.sqrt())
    }
}

impl Indicator for StdDev {
    type Output = f64;

    /// Returns 0.0 when fewer than `period` points are available.
    fn calculate(&self, data: &[f64]) -> f64 {
        if !self.has_enough_data(data) {
            return 0.0;
        }
        Self::mean_and_std(&data[data.len() - self.period..]).1
    }

    fn period(&self) -> usize {
        self.period
    }

    fn name(&self) -> &str {
        "StdDev"
    }
}

/// Bollinger Bands output.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BollingerOutput {
    /// Upper band
    pub upper: f64,
    /// Middle band (SMA)
    pub middle: f64,
    /// Lower band
    pub lower: f64,
}

impl BollingerOutput {
    /// Degenerate bands collapsed onto one price.
    pub fn flat(price: f64) -> Self {
        Self {
            upper: price,
            middle: price,
            lower: price,
        }
    }

    /// Check if price is above upper band.
    pub fn is_overbought(&self, price: f64) -> bool {
        price > self.upper
    }

    /// Check if price is below lower band.
    pub fn is_oversold(&self, price: f64) -> bool {
        price < self.lower
    }

    /// Check if price is above the middle band.
    pub fn is_above_middle(&self, price: f64) -> bool {
        price > self.middle
    }

    /// Check if price is below the middle band.
    pub fn is_below_middle(&self, price: f64) -> bool {
        price < self.middle
    }
}

/// Bollinger Bands.
///
/// Consists of a middle band (SMA) with upper and lower bands at a
/// multiple of the population standard deviation. With fewer than
/// `period` points all three bands equal the last close.
#[derive(Debug, Clone)]
pub struct BollingerBands {
    period: usize,
    std_dev_multiplier: f64,
}

impl BollingerBands {
    /// Create new Bollinger Bands with default parameters (20, 2.0).
    pub fn new() -> Self {
        Self::with_params(20, 2.0)
    }

    /// Create Bollinger Bands with custom parameters.
    pub fn with_params(period: usize, std_dev_multiplier: f64) -> Self {
        assert!(period > 0, "Period must be greater than 0");
        assert!(std_dev_multiplier > 0.0, "Multiplier must be positive");
        Self {
            period,
            std_dev_multiplier,
        }
    }
}

impl Default for BollingerBands {
    fn default() -> Self {
        Self::new()
    }
}

impl Indicator for BollingerBands {
    type Output = BollingerOutput;

    fn calculate(&self, data: &[f64]) -> BollingerOutput {
        let Some(&last) = data.last() else {
            return BollingerOutput::flat(0.0);
        };
        if !self.has_enough_data(data) {
            return BollingerOutput::flat(last);
        }

        let (mean, std_dev) = StdDev::mean_and_std(&data[data.len() - self.period..]);
        let half_width = self.std_dev_multiplier * std_dev;

        BollingerOutput {
            upper: mean + half_width,
            middle: mean,
            lower: mean - half_width,
        }
    }

    fn period(&self) -> usize {
        self.period
    }

    fn name(&self) -> &str {
        "Bollinger Bands"
    }
}
