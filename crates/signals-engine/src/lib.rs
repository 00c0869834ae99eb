//! Signal engine.
//!
//! Runs the strategy set on one symbol's candle history and combines the
//! votes into a single `CompositeSignal`:
//! - `WeightTable` holds the per-strategy weights (default 1.0)
//! - `aggregate` computes the confidence-weighted average vote
//! - `discretize` maps that average back onto the five-level scale

mod aggregator;
mod engine;
mod weights;

pub use aggregator::{aggregate, discretize, Aggregate};
pub use engine::SignalEngine;
pub use weights::{WeightTable, DEFAULT_WEIGHT};
