//! Trading strategy implementations.
//!
//! This crate provides the fixed set of strategies whose votes the engine
//! combines:
//! - RSI + Bollinger Bands mean reversion
//! - Golden/death cross on fast and slow EMAs
//! - MACD momentum
//! - Volume breakout
//!
//! The set is closed: `StrategyKind` enumerates every strategy and
//! dispatches statically.

mod golden_cross;
mod kind;
mod macd_momentum;
mod registry;
mod rsi_mean_reversion;
mod volume_breakout;

pub use golden_cross::{GoldenCrossConfig, GoldenCrossStrategy};
pub use kind::{StrategyKind, StrategySet, StrategySetConfig};
pub use macd_momentum::{MacdMomentumConfig, MacdMomentumStrategy};
pub use registry::{StrategyInfo, StrategyRegistry};
pub use rsi_mean_reversion::{RsiMeanReversionConfig, RsiMeanReversionStrategy};
pub use volume_breakout::{VolumeBreakoutConfig, VolumeBreakoutStrategy};

/// Round for display, ties to even.
pub(crate) fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10_f64.powi(decimals);
    (value * factor).round_ties_even() / factor
}
