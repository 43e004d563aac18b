//! Cache point builder
//!
//! Maps one primary catalog record onto an export point with the full
//! geocaching metadata block. This is the lossiest and most conditional part
//! of the pipeline: every omission here is by design, driven by what the
//! source record actually carries and by the batch-wide detail decision.

use crate::core::points::{CacheMetadata, ExportPoint, ExportWaypoint};
use crate::core::translate;
use crate::domain::{GeocacheRecord, WaypointRecord};
use crate::util::date::format_iso_date;

/// Builds an export point for a cache record.
///
/// Returns `None` when the record has no coordinates; such records are not
/// exportable and are skipped silently by the assembler.
///
/// `with_waypoints` controls whether the nested waypoint list is attached.
/// `with_details` is the batch-wide detail decision: when false, the short
/// description, long description and hint stay unset. Large transfers with
/// these fields populated are known to overwhelm the receiving application,
/// so the assembler turns them off wholesale rather than per record.
pub fn build_cache_point(
    cache: &GeocacheRecord,
    with_waypoints: bool,
    with_details: bool,
) -> Option<ExportPoint> {
    let coords = match cache.coords {
        Some(coords) => coords,
        None => {
            tracing::debug!(geocode = %cache.geocode, "Skipping cache without coordinates");
            return None;
        }
    };

    let mut metadata = CacheMetadata {
        cache_id: cache.geocode.clone(),
        available: !cache.disabled,
        archived: cache.archived,
        premium_only: cache.premium_only,
        name: cache.name.clone(),
        placed_by: cache.owner.clone(),
        hidden: cache.hidden.map(format_iso_date),
        cache_type: translate::cache_type_code(cache.cache_type),
        container: translate::cache_size_code(cache.size),
        difficulty: rating(cache.difficulty),
        terrain: rating(cache.terrain),
        found: cache.found,
        waypoints: None,
        short_description: None,
        long_description: None,
        encoded_hints: None,
    };

    if with_waypoints && cache.has_waypoints() {
        metadata.waypoints = Some(
            cache
                .waypoints
                .iter()
                .flatten()
                .map(build_nested_waypoint)
                .collect(),
        );
    }

    if with_details {
        metadata.short_description = Some(cache.short_description.clone());
        metadata.long_description = Some(cache.description.clone());
        metadata.encoded_hints = Some(cache.hint.clone());
    }

    let mut point = ExportPoint::new(cache.name.clone(), coords.latitude, coords.longitude);
    point.geocaching = Some(metadata);
    Some(point)
}

/// Ratings at or below zero mean "not set" in the catalog and are omitted.
fn rating(value: f32) -> Option<f32> {
    (value > 0.0).then_some(value)
}

fn build_nested_waypoint(waypoint: &WaypointRecord) -> ExportWaypoint {
    ExportWaypoint {
        code: waypoint.lookup.clone(),
        name: waypoint.name.clone(),
        description: waypoint.note.clone(),
        kind: translate::waypoint_kind_code(waypoint.kind),
        latitude: waypoint.coords.map(|c| c.latitude),
        longitude: waypoint.coords.map(|c| c.longitude),
    }
}
