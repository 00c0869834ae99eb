//! Indicator trait definitions.

/// Trait for technical indicators.
///
/// Indicators reduce a price (or volume) history to its latest value.
/// They never fail: when the history is shorter than `period()` each
/// indicator returns a documented neutral fallback instead.
pub trait Indicator: Send + Sync {
    /// The output type of the indicator.
    type Output;

    /// Calculate the latest indicator value for the given data.
    ///
    /// # Arguments
    /// * `data` - Input data, oldest first
    fn calculate(&self, data: &[f64]) -> Self::Output;

    /// Get the minimum data points required for a non-fallback value.
    fn period(&self) -> usize;

    /// Get the name of the indicator.
    fn name(&self) -> &str;

    /// Check whether `data` is long enough to avoid the fallback.
    fn has_enough_data(&self, data: &[f64]) -> bool {
        data.len() >= self.period()
    }
}
