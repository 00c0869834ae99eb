//! Technical indicators.
//!
//! Each indicator reduces a history to its latest value:
//! - Moving averages (EMA)
//! - Momentum indicators (RSI, MACD, price change)
//! - Volatility indicators (Standard Deviation, Bollinger Bands)
//! - Volume indicators (volume ratio)
//!
//! All of them tolerate short input by returning a neutral fallback.

pub mod momentum;
pub mod moving_average;
pub mod volatility;
pub mod volume;

pub use momentum::{price_change, Macd, MacdOutput, Rsi};
pub use moving_average::Ema;
pub use volatility::{BollingerBands, BollingerOutput, StdDev};
pub use volume::VolumeRatio;
