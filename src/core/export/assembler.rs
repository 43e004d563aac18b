//! Batch assembly and pipeline orchestration
//!
//! The assembler walks the mixed input collection once, dispatches each
//! entity to the matching point builder, filters out everything that could
//! not be mapped, and hands the resulting batch to the transport layer.

use super::cache::build_cache_point;
use super::summary::ExportSummary;
use super::waypoint::build_waypoint_point;
use crate::adapters::bridge::MapBridge;
use crate::core::points::Batch;
use crate::core::transport::dispatch_batch;
use crate::domain::CatalogEntity;

/// Input sizes from this count upward disable the detail fields.
///
/// Transfers carrying descriptions and hints for hundreds of caches are
/// known to break the receiving application, so the decision is made once
/// over the whole input set. Part of the external contract, not
/// configuration.
pub const DETAIL_THRESHOLD: usize = 200;

/// Assembles a batch from a mixed entity collection and hands it off.
///
/// One assembler instance configures one export call: whether cache
/// waypoints ride along, and whether the map application should treat the
/// handoff as an export. The assembler owns no state between calls;
/// everything is built fresh per [`export`](BatchAssembler::export).
#[derive(Clone, Copy)]
pub struct BatchAssembler<'a> {
    bridge: &'a dyn MapBridge,
    with_waypoints: bool,
    export_mode: bool,
}

impl<'a> BatchAssembler<'a> {
    /// Creates an assembler delivering through the given bridge
    pub fn new(bridge: &'a dyn MapBridge) -> Self {
        Self {
            bridge,
            with_waypoints: false,
            export_mode: false,
        }
    }

    /// Include each cache's waypoints in its metadata block
    pub fn with_waypoints(mut self, with_waypoints: bool) -> Self {
        self.with_waypoints = with_waypoints;
        self
    }

    /// Pass the export-mode flag through to the map application
    pub fn export_mode(mut self, export_mode: bool) -> Self {
        self.export_mode = export_mode;
        self
    }

    /// Runs the full pipeline over the input collection.
    ///
    /// Returns `None` when nothing was handed off: empty input, or every
    /// entity filtered out for missing coordinates. Otherwise the batch went
    /// through exactly one transport entry point and the summary says which.
    ///
    /// The detail decision is made from the INPUT size, not the filtered
    /// point count, matching the long-standing behavior of the source
    /// system (a conservative bound, since filtering only shrinks the set).
    /// Output points preserve input order.
    pub fn export(&self, entities: &[CatalogEntity]) -> Option<ExportSummary> {
        if entities.is_empty() {
            tracing::warn!("Nothing to export, input collection is empty");
            return None;
        }

        let with_details = entities.len() < DETAIL_THRESHOLD;
        let mut batch = Batch::new();
        for entity in entities {
            let point = match entity {
                CatalogEntity::Cache(cache) => {
                    build_cache_point(cache, self.with_waypoints, with_details)
                }
                CatalogEntity::Waypoint(waypoint) => build_waypoint_point(waypoint),
            };
            if let Some(point) = point {
                batch.add_point(point);
            }
        }

        if batch.is_empty() {
            tracing::warn!(
                input = entities.len(),
                "Nothing to export, no entity had coordinates"
            );
            return None;
        }

        let input_count = entities.len();
        let point_count = batch.len();
        let transport = dispatch_batch(batch, self.export_mode, self.bridge);

        let summary = ExportSummary {
            input_count,
            point_count,
            skipped: input_count - point_count,
            detail_mode: with_details,
            transport,
        };
        tracing::info!(
            points = summary.point_count,
            skipped = summary.skipped,
            detail_mode = summary.detail_mode,
            transport = ?summary.transport,
            "Batch handed off"
        );
        Some(summary)
    }
}
