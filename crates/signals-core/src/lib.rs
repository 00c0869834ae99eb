//! Core types and traits for the signal engine.
//!
//! This crate provides the foundational building blocks including:
//! - Market data types (Candle, CandleSeries)
//! - The five-level signal scale and per-strategy votes
//! - The composite result returned to callers and its alert projection
//! - The `Indicator` trait implemented by the indicator library

pub mod error;
pub mod traits;
pub mod types;

pub use error::{DataError, SignalError, SignalResult, StrategyError};
pub use traits::*;
pub use types::*;
