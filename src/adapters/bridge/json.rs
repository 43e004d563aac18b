//! JSON file bridge
//!
//! Delivery vehicle for the CLI: the handed-off payload is serialized to a
//! JSON file in exactly the shape the pipeline produced, wrapped in a small
//! envelope recording which entry point fired. Send failures are logged and
//! swallowed; delivery is best-effort by contract.

use super::traits::MapBridge;
use crate::core::points::Batch;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Envelope written around a direct handoff.
#[derive(Debug, Serialize)]
struct DirectEnvelope<'a> {
    transport: &'static str,
    export_mode: bool,
    batch: &'a Batch,
}

/// Envelope written around a paged handoff.
#[derive(Debug, Serialize)]
struct PagedEnvelope<'a> {
    transport: &'static str,
    provider_address: &'a str,
    export_mode: bool,
    batches: &'a [Batch],
}

/// Bridge that writes every handoff to a JSON file.
#[derive(Debug, Clone)]
pub struct JsonBridge {
    output: PathBuf,
}

impl JsonBridge {
    /// Creates a bridge writing to the given output path
    pub fn new(output: impl Into<PathBuf>) -> Self {
        Self {
            output: output.into(),
        }
    }

    /// Output path this bridge writes to
    pub fn output(&self) -> &Path {
        &self.output
    }

    fn write_payload<T: Serialize>(&self, payload: &T) {
        let json = match serde_json::to_string_pretty(payload) {
            Ok(json) => json,
            Err(e) => {
                tracing::error!(error = %e, "Failed to serialize handoff payload");
                return;
            }
        };
        if let Err(e) = std::fs::write(&self.output, json) {
            tracing::error!(
                error = %e,
                path = %self.output.display(),
                "Failed to write handoff payload"
            );
        }
    }
}

impl MapBridge for JsonBridge {
    fn is_available(&self) -> bool {
        // Writable destination directory stands in for "application present"
        match self.output.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir.is_dir(),
            _ => true,
        }
    }

    fn send_batch(&self, batch: &Batch, export_mode: bool) {
        tracing::info!(
            points = batch.len(),
            export_mode,
            path = %self.output.display(),
            "Writing direct handoff"
        );
        self.write_payload(&DirectEnvelope {
            transport: "direct",
            export_mode,
            batch,
        });
    }

    fn send_batch_paged(&self, batches: &[Batch], provider_address: &str, export_mode: bool) {
        tracing::info!(
            batches = batches.len(),
            provider_address,
            export_mode,
            path = %self.output.display(),
            "Writing paged handoff"
        );
        self.write_payload(&PagedEnvelope {
            transport: "paged",
            provider_address,
            export_mode,
            batches,
        });
    }
}
