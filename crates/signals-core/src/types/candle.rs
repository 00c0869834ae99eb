//! OHLCV candle types.

use serde::{Deserialize, Serialize};

use crate::error::{DataError, SignalError, SignalResult};

/// Number of columns in a raw OHLCV row: time, open, high, low, close, volume.
pub const OHLCV_COLUMNS: usize = 6;

/// A single OHLCV bar.
/// Uses f64 throughout for fast indicator calculations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    /// Unix timestamp in milliseconds
    pub timestamp: i64,
    /// Opening price
    pub open: f64,
    /// Highest price
    pub high: f64,
    /// Lowest price
    pub low: f64,
    /// Closing price
    pub close: f64,
    /// Trading volume
    pub volume: f64,
}

impl Candle {
    /// Create a new candle.
    pub fn new(timestamp: i64, open: f64, high: f64, low: f64, close: f64, volume: f64) -> Self {
        Self {
            timestamp,
            open,
            high,
            low,
            close,
            volume,
        }
    }

    /// Build a candle from a raw `[time, open, high, low, close, volume]` row.
    ///
    /// Exchange feeds deliver the time column in seconds as a float; values
    /// that already look like milliseconds are kept as-is.
    pub fn from_row(row: &[f64]) -> Option<Self> {
        if row.len() < OHLCV_COLUMNS {
            return None;
        }
        let raw = row[0] as i64;
        let timestamp = if raw > 10_000_000_000 {
            raw
        } else {
            raw.saturating_mul(1000)
        };
        Some(Self::new(timestamp, row[1], row[2], row[3], row[4], row[5]))
    }
}

/// Chronologically ordered candle history for one symbol.
///
/// A series always holds at least one candle, so `last()` never fails.
/// Ordering and de-duplication are the data provider's responsibility.
#[derive(Debug, Clone, Serialize)]
pub struct CandleSeries {
    /// Symbol identifier
    pub symbol: String,
    candles: Vec<Candle>,
}

impl CandleSeries {
    /// Create a series, rejecting an empty candle array.
    pub fn new(symbol: impl Into<String>, candles: Vec<Candle>) -> SignalResult<Self> {
        let symbol = symbol.into();
        if candles.is_empty() {
            return Err(SignalError::InvalidInput(format!(
                "empty candle array for {}",
                symbol
            )));
        }
        Ok(Self { symbol, candles })
    }

    /// Create a series from raw `[time, open, high, low, close, volume]` rows.
    pub fn from_rows<R: AsRef<[f64]>>(symbol: impl Into<String>, rows: &[R]) -> SignalResult<Self> {
        let candles = rows
            .iter()
            .enumerate()
            .map(|(i, row)| {
                let row = row.as_ref();
                Candle::from_row(row).ok_or(DataError::MissingColumns {
                    row: i,
                    expected: OHLCV_COLUMNS,
                    found: row.len(),
                })
            })
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| SignalError::InvalidInput(e.to_string()))?;

        Self::new(symbol, candles)
    }

    /// Get the number of candles.
    #[inline]
    pub fn len(&self) -> usize {
        self.candles.len()
    }

    /// Always false; kept for API symmetry with `len`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.candles.is_empty()
    }

    /// Get the most recent candle.
    pub fn last(&self) -> &Candle {
        // Non-empty by construction.
        &self.candles[self.candles.len() - 1]
    }

    /// The last close, i.e. the price the whole analysis refers to.
    pub fn last_close(&self) -> f64 {
        self.last().close
    }

    /// Extract close prices as a vector.
    pub fn closes(&self) -> Vec<f64> {
        self.candles.iter().map(|c| c.close).collect()
    }

    /// Extract volumes as a vector.
    pub fn volumes(&self) -> Vec<f64> {
        self.candles.iter().map(|c| c.volume).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_series_rejected() {
        let result = CandleSeries::new("BTCUSD", vec![]);
        assert!(matches!(result, Err(SignalError::InvalidInput(_))));
    }

    #[test]
    fn test_from_rows() {
        let rows = vec![
            vec![1_700_000_000.0, 100.0, 101.0, 99.0, 100.5, 1000.0],
            vec![1_700_003_600.0, 100.5, 102.0, 100.0, 101.5, 2000.0],
        ];
        let series = CandleSeries::from_rows("BTCUSD", &rows).unwrap();

        assert_eq!(series.len(), 2);
        assert_eq!(series.closes(), vec![100.5, 101.5]);
        assert_eq!(series.volumes(), vec![1000.0, 2000.0]);
        assert_eq!(series.last().timestamp, 1_700_003_600_000);
        assert!((series.last_close() - 101.5).abs() < 1e-10);
    }

    #[test]
    fn test_from_rows_missing_columns() {
        let rows = vec![
            vec![1.0, 100.0, 101.0, 99.0, 100.5, 1000.0],
            vec![2.0, 100.5, 102.0, 100.0],
        ];
        let err = CandleSeries::from_rows("BTCUSD", &rows).unwrap_err();
        match err {
            SignalError::InvalidInput(msg) => assert!(msg.contains("Row 1")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_from_row_extreme_time() {
        let candle = Candle::from_row(&[-1e17, 1.0, 1.0, 1.0, 1.0, 1.0]).unwrap();
        assert_eq!(candle.timestamp, i64::MIN);

        let candle = Candle::from_row(&[f64::MIN, 1.0, 1.0, 1.0, 1.0, 1.0]).unwrap();
        assert_eq!(candle.timestamp, i64::MIN);
    }

    #[test]
    fn test_from_rows_empty() {
        let rows: Vec<[f64; 6]> = vec![];
        assert!(matches!(
            CandleSeries::from_rows("BTCUSD", &rows),
            Err(SignalError::InvalidInput(_))
        ));
    }
}
