//! Analyze command implementation.

use anyhow::{Context, Result};
use signals_config::{load_config, AppConfig};
use signals_data::load_csv;
use signals_monitor::SignalReport;
use std::path::Path;
use tracing::{info, warn};

use crate::cli::AnalyzeArgs;

pub async fn run(args: AnalyzeArgs, config_path: &Path) -> Result<()> {
    info!("Analyzing {} from {}", args.symbol, args.data.display());

    let config = if config_path.exists() {
        load_config(config_path)
            .with_context(|| format!("Failed to load config {}", config_path.display()))?
    } else {
        warn!(
            "Config file {} not found, using defaults",
            config_path.display()
        );
        AppConfig::default()
    };
    let engine = config
        .build_engine()
        .context("Invalid engine configuration")?;

    // Load data
    let data_path = args
        .data
        .to_str()
        .context("Data path is not valid UTF-8")?;
    let series = load_csv(data_path, &args.symbol)
        .await
        .with_context(|| format!("Failed to load data from {}", args.data.display()))?;

    let composite = engine.analyze_series(&series);
    if composite.is_actionable() {
        info!(
            signal = %composite.signal,
            agreeing = composite.agreeing_strategies().count(),
            "Actionable signal"
        );
    }

    // Output results
    let rendered = SignalReport::new(&composite).render(args.output)?;
    println!("{}", rendered);

    Ok(())
}
