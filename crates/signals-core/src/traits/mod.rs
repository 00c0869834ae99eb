//! Core traits for the signal engine.

mod indicator;
mod strategy;

pub use indicator::Indicator;
pub use strategy::{Strategy, StrategyConfig};
