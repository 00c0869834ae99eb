//! Logging and result reporting.

mod logging;
mod report;

pub use logging::{setup_logging, LogGuard};
pub use report::{OutputFormat, SignalReport};
