//! Configuration management
//!
//! A small TOML file tells the CLI where the catalog lives, where the
//! handoff payload goes and how the export should behave. The pipeline's
//! thresholds (detail cutoff, direct-transport limit) are deliberately NOT
//! configurable; they are part of the contract with the map application.

pub mod loader;
pub mod schema;

pub use loader::load_config;
pub use schema::{CatalogConfig, ExportConfig, LoggingConfig, WaymarkConfig};
