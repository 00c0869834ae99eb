//! Moving average indicators.

use signals_core::traits::Indicator;

/// Exponential Moving Average (EMA).
///
/// Seeded with the first element of the input rather than an SMA, so the
/// whole history is folded in a single pass. With fewer than `period`
/// points the last value is returned unchanged.
#[derive(Debug, Clone)]
pub struct Ema {
    period: usize,
    multiplier: f64,
}

impl Ema {
    /// Create a new EMA with the specified period.
    pub fn new(period: usize) -> Self {
        assert!(period > 0, "Period must be greater than 0");
        let multiplier = 2.0 / (period as f64 + 1.0);
        Self { period, multiplier }
    }
}

impl Indicator for Ema {
    type Output = f64;

    fn calculate(&self, data: &[f64]) -> f64 {
        let Some(&last) = data.last() else {
            return 0.0;
        };
        if !self.has_enough_data(data) {
            return last;
        }

        let one_minus_mult = 1.0 - self.multiplier;
        data[1..]
            .iter()
            .fold(data[0], |ema, &price| price * self.multiplier + ema * one_minus_mult)
    }

    fn period(&self) -> usize {
        self.period
    }

    fn name(&self) -> &str {
        "EMA"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ema_seeded_with_first_value() {
        let ema = Ema::new(3);
        let data = vec![1.0, 2.0, 3.0, 4.0, 5.0];

        // mult = 2/(3+1) = 0.5
        // 1.0 -> 1.5 -> 2.25 -> 3.125 -> 4.0625
        assert!((ema.calculate(&data) - 4.0625).abs() < 1e-10);
    }

    #[test]
    fn test_ema_short_input_returns_last() {
        let ema = Ema::new(21);
        let data = vec![10.0, 11.0, 12.5];

        assert_eq!(ema.calculate(&data), 12.5);
    }

    #[test]
    fn test_ema_exact_period() {
        let ema = Ema::new(2);
        // mult = 2/3; 10 -> 20*2/3 + 10/3
        let expected = 20.0 * (2.0 / 3.0) + 10.0 * (1.0 - 2.0 / 3.0);
        assert!((ema.calculate(&[10.0, 20.0]) - expected).abs() < 1e-10);
    }

    #[test]
    fn test_ema_constant_series() {
        let ema = Ema::new(8);
        let data = vec![42.0; 50];
        assert!((ema.calculate(&data) - 42.0).abs() < 1e-10);
    }

    #[test]
    fn test_ema_empty() {
        assert_eq!(Ema::new(5).calculate(&[]), 0.0);
    }
}
