//! The analysis entry point.

use chrono::Utc;
use signals_core::{
    error::SignalResult,
    types::{Candle, CandleSeries, CompositeSignal},
};
use signals_strategies::StrategySet;
use tracing::{debug, info, instrument};

use crate::{aggregate, WeightTable};

/// Multi-strategy signal engine.
///
/// Holds only immutable configuration (the weight table and the strategy
/// set), so one engine can analyze any number of symbols, concurrently,
/// without synchronization.
#[derive(Debug, Clone, Default)]
pub struct SignalEngine {
    weights: WeightTable,
    strategies: StrategySet,
}

impl SignalEngine {
    /// Create an engine running the default strategy set.
    pub fn new(weights: WeightTable) -> Self {
        Self::with_strategies(weights, StrategySet::default())
    }

    /// Create an engine with a custom-parameterized strategy set.
    pub fn with_strategies(weights: WeightTable, strategies: StrategySet) -> Self {
        Self {
            weights,
            strategies,
        }
    }

    /// Analyze a symbol's candle history.
    ///
    /// Fails only with `SignalError::InvalidInput` when `candles` is empty.
    pub fn analyze(&self, symbol: &str, candles: &[Candle]) -> SignalResult<CompositeSignal> {
        let series = CandleSeries::new(symbol, candles.to_vec())?;
        Ok(self.analyze_series(&series))
    }

    /// Analyze raw `[time, open, high, low, close, volume]` rows as delivered
    /// by exchange OHLC endpoints.
    ///
    /// Fails with `SignalError::InvalidInput` when there are no rows or a row
    /// is missing columns.
    pub fn analyze_rows<R: AsRef<[f64]>>(
        &self,
        symbol: &str,
        rows: &[R],
    ) -> SignalResult<CompositeSignal> {
        let series = CandleSeries::from_rows(symbol, rows)?;
        Ok(self.analyze_series(&series))
    }

    /// Analyze a validated candle series. Never fails.
    #[instrument(
        skip_all,
        fields(
            symbol = %series.symbol,
            candles = series.len(),
            strategies = self.strategies.len()
        )
    )]
    pub fn analyze_series(&self, series: &CandleSeries) -> CompositeSignal {
        if series.len() < self.strategies.warmup_period() {
            debug!(
                warmup = self.strategies.warmup_period(),
                "Short history, some indicators use fallback values"
            );
        }

        let votes = self.strategies.evaluate(series);
        let result = aggregate(&votes, &self.weights);
        let signal = result.signal();

        info!(
            price = series.last_close(),
            signal = %signal,
            confidence = result.avg_confidence,
            avg_signal = result.avg_signal,
            "Composite signal"
        );

        CompositeSignal {
            symbol: series.symbol.clone(),
            price: series.last_close(),
            signal,
            confidence: result.avg_confidence,
            strategies: votes,
            timestamp: Utc::now(),
        }
    }
}
