//! CSV data source.

use chrono::{NaiveDate, NaiveDateTime};
use csv::ReaderBuilder;
use serde::Deserialize;
use std::path::Path;
use signals_core::error::DataError;
use signals_core::types::Candle;
use tracing::debug;

/// One CSV row. Headers accept the common spellings.
#[derive(Debug, Deserialize)]
struct CsvRecord {
    #[serde(
        alias = "Time",
        alias = "date",
        alias = "Date",
        alias = "timestamp",
        alias = "Timestamp"
    )]
    time: String,
    #[serde(alias = "Open")]
    open: f64,
    #[serde(alias = "High")]
    high: f64,
    #[serde(alias = "Low")]
    low: f64,
    #[serde(alias = "Close", alias = "Adj Close")]
    close: f64,
    #[serde(alias = "Volume", default)]
    volume: f64,
}

/// CSV data source for historical candles.
pub struct CsvDataSource {
    path: String,
}

impl CsvDataSource {
    /// Create a new CSV data source.
    pub fn new(path: &str) -> Result<Self, DataError> {
        if !Path::new(path).exists() {
            return Err(DataError::NoDataAvailable(format!("{} does not exist", path)));
        }
        Ok(Self {
            path: path.to_string(),
        })
    }

    /// Load all candles from the CSV file, oldest first.
    pub async fn load_all(&self) -> Result<Vec<Candle>, DataError> {
        let path = self.path.clone();
        tokio::task::spawn_blocking(move || Self::load_from_path(&path))
            .await
            .map_err(|e| DataError::ParseError(e.to_string()))?
    }

    /// Load candles from a specific path.
    fn load_from_path(path: &str) -> Result<Vec<Candle>, DataError> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_path(path)
            .map_err(|e| DataError::ParseError(e.to_string()))?;

        let mut candles = Vec::new();

        for result in reader.deserialize() {
            let record: CsvRecord = result.map_err(|e| DataError::ParseError(e.to_string()))?;

            let timestamp = parse_timestamp(&record.time)?;

            candles.push(Candle::new(
                timestamp,
                record.open,
                record.high,
                record.low,
                record.close,
                record.volume,
            ));
        }

        if candles.is_empty() {
            return Err(DataError::NoDataAvailable(format!("{} has no rows", path)));
        }

        // Sort by timestamp
        candles.sort_by_key(|c| c.timestamp);
        debug!(path, candles = candles.len(), "Loaded candles");

        Ok(candles)
    }
}

/// Parse various timestamp formats into unix milliseconds.
fn parse_timestamp(date_str: &str) -> Result<i64, DataError> {
    let formats = [
        "%Y-%m-%d",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%dT%H:%M:%S",
        "%Y/%m/%d",
        "%m/%d/%Y",
        "%d-%m-%Y",
    ];

    for format in formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(date_str, format) {
            return Ok(dt.and_utc().timestamp_millis());
        }
        if let Ok(d) = NaiveDate::parse_from_str(date_str, format) {
            if let Some(dt) = d.and_hms_opt(0, 0, 0) {
                return Ok(dt.and_utc().timestamp_millis());
            }
        }
    }

    // Unix timestamps, as exported by exchange OHLC endpoints
    if let Ok(ts) = date_str.parse::<f64>() {
        let ts = ts as i64;
        // Assume milliseconds if > 10 digits
        return Ok(if ts > 10_000_000_000 {
            ts
        } else {
            ts.saturating_mul(1000)
        });
    }

    Err(DataError::ParseError(format!(
        "Could not parse date: {}",
        date_str
    )))
}
