//! Export command implementation
//!
//! Loads the catalog, runs the export pipeline and delivers the handoff
//! payload through the JSON bridge (or records it in memory for dry runs).

use crate::adapters::bridge::{JsonBridge, MapBridge, RecordingBridge};
use crate::adapters::catalog::load_catalog;
use crate::config::load_config;
use crate::core::export::BatchAssembler;
use clap::Args;

/// Arguments for the export command
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Dry run mode - run the pipeline without writing the handoff payload
    #[arg(long)]
    pub dry_run: bool,

    /// Exclude cache waypoints from the export
    #[arg(long)]
    pub no_waypoints: bool,

    /// Ask the map application to treat the handoff as an export
    #[arg(long)]
    pub export_mode: bool,

    /// Override the catalog path from the configuration file
    #[arg(long)]
    pub catalog: Option<String>,

    /// Override the handoff output path from the configuration file
    #[arg(long)]
    pub output: Option<String>,
}

impl ExportArgs {
    /// Execute the export command, returning the process exit code
    pub fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!("Starting export command");

        let mut config = load_config(config_path)?;

        // Apply CLI overrides
        if let Some(catalog) = &self.catalog {
            tracing::info!(catalog = %catalog, "Overriding catalog path from CLI");
            config.catalog.path = catalog.clone();
        }
        if let Some(output) = &self.output {
            tracing::info!(output = %output, "Overriding output path from CLI");
            config.export.output = output.clone();
        }
        if self.no_waypoints {
            config.export.with_waypoints = false;
        }
        if self.export_mode {
            config.export.export_mode = true;
        }

        let entities = load_catalog(&config.catalog.path)?;

        let json_bridge;
        let recording_bridge;
        let bridge: &dyn MapBridge = if self.dry_run {
            tracing::info!("Dry run, handoff will not be written");
            recording_bridge = RecordingBridge::new();
            &recording_bridge
        } else {
            json_bridge = JsonBridge::new(&config.export.output);
            &json_bridge
        };

        if !bridge.is_available() {
            anyhow::bail!(
                "Map application is not reachable (cannot write to {})",
                config.export.output
            );
        }

        let outcome = BatchAssembler::new(bridge)
            .with_waypoints(config.export.with_waypoints)
            .export_mode(config.export.export_mode)
            .export(&entities);

        match outcome {
            Some(summary) => {
                println!("{summary}");
                Ok(0)
            }
            None => {
                tracing::warn!("Export produced no points");
                println!("Nothing to export");
                Ok(1)
            }
        }
    }
}
