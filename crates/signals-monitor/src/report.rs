//! Rendering of analysis results.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use signals_core::error::{SignalError, SignalResult};
use signals_core::types::CompositeSignal;

/// How a composite signal is rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable summary with the per-strategy breakdown
    #[default]
    Text,
    /// Full composite as JSON
    Json,
    /// Flat alert record as JSON
    Alert,
}

impl FromStr for OutputFormat {
    type Err = SignalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "alert" => Ok(Self::Alert),
            other => Err(SignalError::InvalidInput(format!(
                "Unknown output format: {}",
                other
            ))),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
            Self::Alert => write!(f, "alert"),
        }
    }
}

/// Report over a single analysis.
#[derive(Debug, Clone)]
pub struct SignalReport<'a> {
    composite: &'a CompositeSignal,
}

impl<'a> SignalReport<'a> {
    pub fn new(composite: &'a CompositeSignal) -> Self {
        Self { composite }
    }

    /// Render in the requested format.
    pub fn render(&self, format: OutputFormat) -> SignalResult<String> {
        match format {
            OutputFormat::Text => Ok(self.summary()),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(self.composite)?),
            OutputFormat::Alert => Ok(serde_json::to_string_pretty(&self.composite.to_alert())?),
        }
    }

    /// Generate a text summary.
    pub fn summary(&self) -> String {
        let c = self.composite;
        let mut s = String::new();

        s.push_str("═══════════════════════════════════════════════════════════\n");
        s.push_str(&format!("  {}\n", c.symbol));
        s.push_str("═══════════════════════════════════════════════════════════\n");
        s.push_str(&format!("  Price:        ${:.2}\n", c.price));
        s.push_str(&format!("  Signal:       {}\n", c.signal.label()));
        s.push_str(&format!("  Confidence:   {:.1}%\n", c.confidence));
        s.push('\n');

        s.push_str("STRATEGIES\n");
        s.push_str("───────────────────────────────────────────────────────────\n");
        for strategy in &c.strategies {
            s.push_str(&format!(
                "  - {}: {} ({:.0}%) - {}\n",
                strategy.name,
                strategy.signal.label(),
                strategy.confidence,
                strategy.reason
            ));
        }

        s
    }
}

impl fmt::Display for SignalReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.summary())
    }
}
