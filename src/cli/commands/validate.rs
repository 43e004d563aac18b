//! Validate command implementation
//!
//! Checks the configuration and the catalog file without touching the map
//! application, and reports what an export would work with.

use crate::adapters::catalog::load_catalog;
use crate::config::load_config;
use crate::domain::CatalogEntity;
use clap::Args;

/// Arguments for the validate command
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Check the configuration only, without parsing the catalog file
    #[arg(long)]
    pub config_only: bool,
}

impl ValidateArgs {
    /// Execute the validate command, returning the process exit code
    pub fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let config = load_config(config_path)?;
        println!("Configuration OK: {config_path}");

        if !self.config_only {
            let entities = load_catalog(&config.catalog.path)?;
            let caches = entities
                .iter()
                .filter(|e| matches!(e, CatalogEntity::Cache(_)))
                .count();
            let waypoints = entities.len() - caches;
            let without_coords = entities
                .iter()
                .filter(|e| match e {
                    CatalogEntity::Cache(c) => c.coords.is_none(),
                    CatalogEntity::Waypoint(w) => w.coords.is_none(),
                })
                .count();

            println!(
                "Catalog OK: {} entities ({caches} caches, {waypoints} waypoints, \
                 {without_coords} without coordinates)",
                entities.len()
            );
        }

        Ok(0)
    }
}
