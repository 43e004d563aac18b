//! Logging and observability
//!
//! Structured logging with the `tracing` crate: console output, env-filter
//! overridable via `RUST_LOG`. The pipeline logs skipped records at debug
//! and milestones at info; handoff failures inside bridges are logged at
//! error and never propagate.

use crate::domain::{Result, WaymarkError};
use tracing_subscriber::EnvFilter;

/// Initializes the global tracing subscriber.
///
/// `level` applies to the crate's own events; other targets stay at `warn`.
/// `RUST_LOG` takes precedence when set.
///
/// # Errors
///
/// Returns an error when `level` is not a valid filter directive or a
/// subscriber is already installed.
pub fn init_logging(level: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(format!("warn,waymark={level}")))
        .map_err(|e| WaymarkError::Configuration(format!("Invalid log level '{level}': {e}")))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .map_err(|e| WaymarkError::Configuration(format!("Failed to initialize logging: {e}")))?;

    Ok(())
}
