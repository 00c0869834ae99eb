//! Strategy registry describing the built-in strategy set.

use crate::StrategyKind;
use serde::{Deserialize, Serialize};
use signals_core::traits::Strategy;

/// Information about a registered strategy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrategyInfo {
    /// Registry key
    pub key: String,
    /// Strategy name (weight-table key)
    pub name: String,
    /// Strategy description
    pub description: String,
    /// Default configuration as JSON
    pub default_config: serde_json::Value,
}

/// Registry for the available strategies.
pub struct StrategyRegistry {
    strategies: Vec<StrategyInfo>,
}

impl StrategyRegistry {
    /// Create a registry with all built-in strategies, in evaluation order.
    pub fn new() -> Self {
        let strategies = StrategyKind::KEYS
            .iter()
            .filter_map(|key| StrategyKind::from_key(key).ok())
            .map(|kind| StrategyInfo {
                key: kind.key().to_string(),
                name: kind.name().to_string(),
                description: kind.description().to_string(),
                default_config: Self::default_config(&kind),
            })
            .collect();

        Self { strategies }
    }

    fn default_config(kind: &StrategyKind) -> serde_json::Value {
        let value = match kind {
            StrategyKind::RsiMeanReversion(s) => serde_json::to_value(s.config()),
            StrategyKind::GoldenCross(s) => serde_json::to_value(s.config()),
            StrategyKind::MacdMomentum(s) => serde_json::to_value(s.config()),
            StrategyKind::VolumeBreakout(s) => serde_json::to_value(s.config()),
        };
        value.unwrap_or_default()
    }

    /// List all available strategies.
    pub fn list(&self) -> &[StrategyInfo] {
        &self.strategies
    }
}

impl Default for StrategyRegistry {
    fn default() -> Self {
        Self::new()
    }
}
