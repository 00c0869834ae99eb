//! CLI definitions.

pub mod commands;

use clap::{Parser, Subcommand, ValueEnum};
use signals_monitor::OutputFormat;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "signals")]
#[command(author, version, about = "Multi-strategy technical analysis signal engine")]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config/default.toml", env = "SIGNALS_CONFIG")]
    pub config: PathBuf,

    /// Log level
    #[arg(short, long, default_value = "info")]
    pub log_level: LogLevel,

    /// Enable JSON log format
    #[arg(long)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a candle history and print the composite signal
    Analyze(AnalyzeArgs),
    /// List available strategies
    Strategies,
    /// Validate configuration
    ValidateConfig,
}

#[derive(clap::Args)]
pub struct AnalyzeArgs {
    /// Data file (CSV)
    #[arg(short, long)]
    pub data: PathBuf,

    /// Symbol label for the series
    #[arg(short = 'S', long)]
    pub symbol: String,

    /// Output format (text, json, alert)
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,
}
