//! Candle data loading.
//!
//! The engine never fetches data itself; this crate reads candle histories
//! that were exported elsewhere so they can be fed to an analysis.

mod csv_source;

pub use csv_source::CsvDataSource;

use signals_core::error::SignalResult;
use signals_core::types::CandleSeries;

/// Load a validated candle series from a CSV file.
pub async fn load_csv(path: &str, symbol: &str) -> SignalResult<CandleSeries> {
    let source = CsvDataSource::new(path)?;
    let candles = source.load_all().await?;
    CandleSeries::new(symbol, candles)
}
