//! Per-strategy weights.

use serde::{Deserialize, Serialize};
use signals_core::error::{SignalError, SignalResult};
use std::collections::HashMap;

/// Weight used for strategies missing from the table.
pub const DEFAULT_WEIGHT: f64 = 1.0;

/// Immutable mapping from strategy name to a non-negative weight.
///
/// Names are matched loosely: case, spaces and hyphens are ignored, so
/// `"Golden Cross"`, `"golden cross"` and the registry key `golden_cross`
/// all refer to the same strategy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "HashMap<String, f64>", into = "HashMap<String, f64>")]
pub struct WeightTable {
    weights: HashMap<String, f64>,
}

impl WeightTable {
    /// Create a weight table, rejecting negative or non-finite weights and
    /// names that refer to the same strategy twice.
    pub fn new(weights: HashMap<String, f64>) -> SignalResult<Self> {
        if let Some((name, weight)) = weights
            .iter()
            .find(|(_, w)| !(w.is_finite() && **w >= 0.0))
        {
            return Err(SignalError::Config(format!(
                "weight for '{}' must be a non-negative finite number, got {}",
                name, weight
            )));
        }
        let mut normalized = HashMap::with_capacity(weights.len());
        for (name, weight) in weights {
            let key = normalize(&name);
            if normalized.insert(key.clone(), weight).is_some() {
                return Err(SignalError::Config(format!(
                    "weight for '{}' is configured more than once",
                    key
                )));
            }
        }
        Ok(Self {
            weights: normalized,
        })
    }

    /// Weight for a strategy, falling back to the default.
    pub fn weight_for(&self, name: &str) -> f64 {
        self.weights
            .get(&normalize(name))
            .copied()
            .unwrap_or(DEFAULT_WEIGHT)
    }

    /// Explicitly configured entries.
    pub fn entries(&self) -> impl Iterator<Item = (&str, f64)> {
        self.weights.iter().map(|(name, w)| (name.as_str(), *w))
    }
}

fn normalize(name: &str) -> String {
    name.trim()
        .chars()
        .map(|c| match c {
            ' ' | '-' => '_',
            c => c.to_ascii_lowercase(),
        })
        .collect()
}

impl TryFrom<HashMap<String, f64>> for WeightTable {
    type Error = SignalError;

    fn try_from(weights: HashMap<String, f64>) -> SignalResult<Self> {
        Self::new(weights)
    }
}

impl From<WeightTable> for HashMap<String, f64> {
    fn from(table: WeightTable) -> Self {
        table.weights
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weight() {
        let table = WeightTable::new(HashMap::from([("MACD".to_string(), 2.5)])).unwrap();

        assert_eq!(table.weight_for("MACD"), 2.5);
        assert_eq!(table.weight_for("Golden Cross"), DEFAULT_WEIGHT);
        assert_eq!(WeightTable::default().weight_for("anything"), 1.0);
    }

    #[test]
    fn test_names_match_registry_keys() {
        let table = WeightTable::new(HashMap::from([
            ("golden_cross".to_string(), 2.0),
            ("RSI Mean Reversion".to_string(), 0.5),
        ]))
        .unwrap();

        assert_eq!(table.weight_for("Golden Cross"), 2.0);
        assert_eq!(table.weight_for("rsi_mean_reversion"), 0.5);
        assert_eq!(table.weight_for("rsi mean reversion"), 0.5);
    }

    #[test]
    fn test_rejects_duplicate_names() {
        // Both spellings resolve to the same strategy; neither may win silently
        for _ in 0..50 {
            let result = WeightTable::new(HashMap::from([
                ("Golden Cross".to_string(), 2.0),
                ("golden_cross".to_string(), 0.5),
            ]));
            assert!(matches!(result, Err(SignalError::Config(_))));
        }

        let result: Result<WeightTable, _> =
            serde_json::from_str(r#"{"MACD": 1.0, "macd": 2.0}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_negative_weight() {
        let result = WeightTable::new(HashMap::from([("MACD".to_string(), -1.0)]));
        assert!(matches!(result, Err(SignalError::Config(_))));
    }

    #[test]
    fn test_rejects_non_finite_weight() {
        let result = WeightTable::new(HashMap::from([("MACD".to_string(), f64::NAN)]));
        assert!(result.is_err());
        let result = WeightTable::new(HashMap::from([("MACD".to_string(), f64::INFINITY)]));
        assert!(result.is_err());
    }

    #[test]
    fn test_zero_weight_allowed() {
        let table = WeightTable::new(HashMap::from([("MACD".to_string(), 0.0)])).unwrap();
        assert_eq!(table.weight_for("MACD"), 0.0);
    }

    #[test]
    fn test_deserialize_validates() {
        let table: WeightTable = serde_json::from_str(r#"{"Golden Cross": 2.0}"#).unwrap();
        assert_eq!(table.weight_for("Golden Cross"), 2.0);

        let result: Result<WeightTable, _> = serde_json::from_str(r#"{"Golden Cross": -2.0}"#);
        assert!(result.is_err());
    }
}
