//! Configuration schema types
//!
//! Maps one-to-one onto the TOML configuration file.

use serde::{Deserialize, Serialize};

/// Main Waymark configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaymarkConfig {
    /// Catalog input settings
    pub catalog: CatalogConfig,

    /// Export and handoff settings
    pub export: ExportConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl WaymarkConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.catalog.validate()?;
        self.export.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Catalog input settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Path to the catalog JSON file (array of tagged entities)
    pub path: String,
}

impl CatalogConfig {
    fn validate(&self) -> Result<(), String> {
        if self.path.trim().is_empty() {
            return Err("catalog.path must not be empty".to_string());
        }
        Ok(())
    }
}

/// Export and handoff settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Path the JSON bridge writes the handoff payload to
    pub output: String,

    /// Include each cache's waypoints in its metadata block
    #[serde(default = "default_true")]
    pub with_waypoints: bool,

    /// Ask the map application to treat the handoff as an export
    #[serde(default)]
    pub export_mode: bool,
}

impl ExportConfig {
    fn validate(&self) -> Result<(), String> {
        if self.output.trim().is_empty() {
            return Err("export.output must not be empty".to_string());
        }
        Ok(())
    }
}

fn default_true() -> bool {
    true
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn or error
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        match self.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => Ok(()),
            other => Err(format!("logging.level '{other}' is not a valid log level")),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}
