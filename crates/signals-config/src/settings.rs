//! Configuration structures.

use serde::{Deserialize, Serialize};
use signals_core::error::{SignalError, SignalResult};
use signals_core::traits::StrategyConfig;
use signals_engine::{SignalEngine, WeightTable};
use signals_strategies::{StrategySet, StrategySetConfig};
use std::collections::HashMap;

/// Main application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub app: AppSettings,
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Strategy name -> weight; missing strategies weigh 1.0
    #[serde(default)]
    pub weights: HashMap<String, f64>,
    #[serde(default)]
    pub strategies: StrategySetConfig,
}

impl AppConfig {
    /// Validate weights and strategy parameters.
    pub fn validate(&self) -> SignalResult<()> {
        self.weight_table()?;
        self.strategies.validate()?;
        Ok(())
    }

    /// Build the engine's weight table.
    pub fn weight_table(&self) -> SignalResult<WeightTable> {
        WeightTable::new(self.weights.clone())
    }

    /// Build an engine from this configuration.
    pub fn build_engine(&self) -> SignalResult<SignalEngine> {
        let strategies = StrategySet::from_config(&self.strategies)?;
        Ok(SignalEngine::with_strategies(self.weight_table()?, strategies))
    }

    /// Render as TOML.
    pub fn to_toml(&self) -> SignalResult<String> {
        toml::to_string_pretty(self).map_err(|e| SignalError::Serialization(e.to_string()))
    }
}

/// General app settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    pub name: String,
    pub environment: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            name: "signals".to_string(),
            environment: "development".to_string(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    /// "pretty" or "json"
    pub format: String,
    /// Log file path; a date suffix is appended as it rolls daily
    pub file: Option<String>,
}

impl LoggingConfig {
    pub fn is_json(&self) -> bool {
        self.format.eq_ignore_ascii_case("json")
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
            file: None,
        }
    }
}
