//! Volume indicators.

use signals_core::traits::Indicator;

/// Ratio of the latest volume to the mean of the preceding volumes.
///
/// With a lookback of 20 the current bar is compared against the 19 bars
/// before it. Returns 1.0 (no spike) when the history is shorter than the
/// lookback or the reference mean is not positive.
#[derive(Debug, Clone)]
pub struct VolumeRatio {
    lookback: usize,
}

impl VolumeRatio {
    /// Ratio reported when no comparison is possible.
    pub const NEUTRAL: f64 = 1.0;

    /// Create a volume ratio over `lookback` bars including the current one.
    pub fn new(lookback: usize) -> Self {
        assert!(lookback > 1, "Lookback must be greater than 1");
        Self { lookback }
    }
}

impl Default for VolumeRatio {
    fn default() -> Self {
        Self::new(20)
    }
}

impl Indicator for VolumeRatio {
    type Output = f64;

    fn calculate(&self, data: &[f64]) -> f64 {
        if !self.has_enough_data(data) {
            return Self::NEUTRAL;
        }

        let window = &data[data.len() - self.lookback..];
        let (previous, current) = window.split_at(window.len() - 1);
        let avg = previous.iter().sum::<f64>() / previous.len() as f64;

        if avg > 0.0 {
            current[0] / avg
        } else {
            Self::NEUTRAL
        }
    }

    fn period(&self) -> usize {
        self.lookback
    }

    fn name(&self) -> &str {
        "Volume Ratio"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_volume_ratio_excludes_current() {
        let ratio = VolumeRatio::new(5);
        let data = vec![9999.0, 100.0, 200.0, 100.0, 200.0, 450.0];

        // previous four: mean 150
        assert!((ratio.calculate(&data) - 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_volume_ratio_insufficient_data() {
        let ratio = VolumeRatio::default();
        let data = vec![100.0; 19];

        assert_eq!(ratio.calculate(&data), 1.0);
    }

    #[test]
    fn test_volume_ratio_zero_average() {
        let ratio = VolumeRatio::new(3);
        assert_eq!(ratio.calculate(&[0.0, 0.0, 500.0]), 1.0);
    }
}
