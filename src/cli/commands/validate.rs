//! Validate configuration command.

use anyhow::Result;
use signals_config::load_config;
use std::path::Path;

pub async fn run(config_path: &Path) -> Result<()> {
    println!("Validating configuration: {:?}", config_path);

    let config = match load_config(config_path) {
        Ok(config) => config,
        Err(e) => {
            println!("Configuration error: {}", e);
            return Err(e.into());
        }
    };

    if let Err(e) = config.validate() {
        println!("Configuration error: {}", e);
        return Err(e.into());
    }

    let weights = config.weight_table()?;

    println!("Configuration is valid!");
    println!();
    println!("App: {}", config.app.name);
    println!("Environment: {}", config.app.environment);
    println!("Log level: {}", config.logging.level);
    println!("Weights:");
    let mut entries: Vec<_> = weights.entries().collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));
    for (name, weight) in entries {
        println!("  {}: {}", name, weight);
    }
    println!();

    // Includes environment overrides and filled-in defaults
    println!("Resolved configuration:");
    println!("{}", config.to_toml()?);

    Ok(())
}
