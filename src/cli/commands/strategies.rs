//! List strategies command.

use anyhow::Result;
use signals_engine::DEFAULT_WEIGHT;
use signals_strategies::StrategyRegistry;

pub async fn run() -> Result<()> {
    let registry = StrategyRegistry::new();

    println!("Available Strategies");
    println!("═══════════════════════════════════════════════════════════");
    println!();

    for info in registry.list() {
        println!("  {} ({})", info.name, info.key);
        println!("  ───────────────────────────────────────────────────────");
        println!("  {}", info.description);
        println!("  Defaults: {}", info.default_config);
        println!();
    }

    println!("Every strategy votes on each analysis.");
    println!(
        "Weights are set under [weights] by key; unlisted strategies weigh {}.",
        DEFAULT_WEIGHT
    );

    Ok(())
}
