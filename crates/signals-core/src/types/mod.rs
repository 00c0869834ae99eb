//! Core data types for the signal engine.

mod candle;
mod composite;
mod signal;

pub use candle::{Candle, CandleSeries, OHLCV_COLUMNS};
pub use composite::{AlertRecord, CompositeSignal};
pub use signal::{SignalType, StrategySignal, NEUTRAL_CONFIDENCE};
