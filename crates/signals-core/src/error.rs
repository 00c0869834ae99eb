//! Error types for the signal engine.

use thiserror::Error;

/// Top-level signal engine error.
#[derive(Error, Debug)]
pub enum SignalError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Strategy error: {0}")]
    Strategy(#[from] StrategyError),

    #[error("Data error: {0}")]
    Data(#[from] DataError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for SignalError {
    fn from(err: serde_json::Error) -> Self {
        SignalError::Serialization(err.to_string())
    }
}

/// Strategy-specific errors.
#[derive(Error, Debug)]
pub enum StrategyError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Strategy not found: {0}")]
    NotFound(String),
}

/// Data source errors.
#[derive(Error, Debug)]
pub enum DataError {
    #[error("No data available: {0}")]
    NoDataAvailable(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Row {row} has {found} columns, expected at least {expected}")]
    MissingColumns {
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// Result type alias for signal engine operations.
pub type SignalResult<T> = Result<T, SignalError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = SignalError::InvalidInput("empty candle array".into());
        assert_eq!(err.to_string(), "Invalid input: empty candle array");

        let err: SignalError = DataError::MissingColumns {
            row: 3,
            expected: 6,
            found: 4,
        }
        .into();
        assert_eq!(
            err.to_string(),
            "Data error: Row 3 has 4 columns, expected at least 6"
        );
    }

    #[test]
    fn test_strategy_error_conversion() {
        let err: SignalError = StrategyError::NotFound("ichimoku".into()).into();
        assert!(matches!(err, SignalError::Strategy(StrategyError::NotFound(_))));
    }
}
