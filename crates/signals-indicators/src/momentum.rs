//! Momentum indicators.

use serde::{Deserialize, Serialize};
use signals_core::traits::Indicator;

use crate::Ema;

/// Relative Strength Index (RSI).
///
/// Uses simple averages of the trailing `period` gains and losses
/// (no Wilder smoothing). Returns 50.0 when fewer than `period + 1`
/// points are available.
#[derive(Debug, Clone)]
pub struct Rsi {
    period: usize,
}

impl Rsi {
    /// Neutral value returned for insufficient history.
    pub const NEUTRAL: f64 = 50.0;

    /// Create a new RSI indicator.
    ///
    /// Common periods are 14 (default) or 9.
    pub fn new(period: usize) -> Self {
        assert!(period > 0, "Period must be greater than 0");
        Self { period }
    }
}

impl Default for Rsi {
    fn default() -> Self {
        Self::new(14)
    }
}

impl Indicator for Rsi {
    type Output = f64;

    fn calculate(&self, data: &[f64]) -> f64 {
        if !self.has_enough_data(data) {
            return Self::NEUTRAL;
        }

        let window = &data[data.len() - self.period - 1..];
        let (gains, losses) = window
            .windows(2)
            .map(|pair| pair[1] - pair[0])
            .fold((0.0, 0.0), |(gains, losses), change| {
                if change > 0.0 {
                    (gains + change, losses)
                } else {
                    (gains, losses - change)
                }
            });

        let period_f64 = self.period as f64;
        let avg_gain = gains / period_f64;
        let avg_loss = losses / period_f64;

        if avg_loss == 0.0 {
            return 100.0;
        }
        100.0 - (100.0 / (1.0 + avg_gain / avg_loss))
    }

    fn period(&self) -> usize {
        self.period + 1 // Need period+1 data points
    }

    fn name(&self) -> &str {
        "RSI"
    }
}

/// MACD (Moving Average Convergence Divergence) output.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacdOutput {
    /// MACD line (fast EMA - slow EMA)
    pub macd: f64,
    /// Signal line (approximated as a fixed fraction of the MACD line)
    pub signal: f64,
    /// Histogram (MACD - Signal)
    pub histogram: f64,
}

/// MACD indicator.
///
/// Only the latest EMA pair is computed, so there is no MACD history to
/// smooth into a real signal line. The signal line is approximated as
/// `macd * signal_ratio` instead, which makes the histogram
/// `macd * (1 - signal_ratio)`.
#[derive(Debug, Clone)]
pub struct Macd {
    fast: Ema,
    slow: Ema,
    signal_ratio: f64,
}

impl Macd {
    /// Fraction of the MACD line used as its signal line.
    pub const SIGNAL_RATIO: f64 = 0.9;

    /// Create a new MACD with default parameters (12, 26).
    pub fn new() -> Self {
        Self::with_periods(12, 26)
    }

    /// Create a MACD with custom periods.
    pub fn with_periods(fast: usize, slow: usize) -> Self {
        assert!(fast > 0 && slow > 0);
        assert!(fast < slow, "Fast period must be less than slow period");
        Self {
            fast: Ema::new(fast),
            slow: Ema::new(slow),
            signal_ratio: Self::SIGNAL_RATIO,
        }
    }
}

impl Default for Macd {
    fn default() -> Self {
        Self::new()
    }
}

impl Indicator for Macd {
    type Output = MacdOutput;

    fn calculate(&self, data: &[f64]) -> MacdOutput {
        let macd = self.fast.calculate(data) - self.slow.calculate(data);
        let signal = macd * self.signal_ratio;
        MacdOutput {
            macd,
            signal,
            histogram: macd - signal,
        }
    }

    fn period(&self) -> usize {
        self.slow.period()
    }

    fn name(&self) -> &str {
        "MACD"
    }
}

/// Fractional change between the last two closes.
///
/// Returns 0.0 with fewer than two points or a non-positive previous close.
pub fn price_change(closes: &[f64]) -> f64 {
    match closes {
        [.., prev, last] if *prev > 0.0 => (last - prev) / prev,
        _ => 0.0,
    }
}
