//! Standalone waypoint point builder
//!
//! A waypoint appearing directly in the input collection becomes a bare
//! point: name, position, and a hyperlink description back to its parent
//! listing. No metadata block is attached.

use crate::core::points::ExportPoint;
use crate::domain::WaypointRecord;

/// Builds an export point for a standalone waypoint record.
///
/// Returns `None` when the record has no coordinates.
pub fn build_waypoint_point(waypoint: &WaypointRecord) -> Option<ExportPoint> {
    let coords = match waypoint.coords {
        Some(coords) => coords,
        None => {
            tracing::debug!(
                lookup = %waypoint.lookup,
                geocode = %waypoint.geocode,
                "Skipping waypoint without coordinates"
            );
            return None;
        }
    };

    let mut point = ExportPoint::new(waypoint.name.clone(), coords.latitude, coords.longitude);
    point.description = Some(format!(
        "<a href=\"{}\">{}</a>",
        waypoint.url, waypoint.geocode
    ));
    Some(point)
}
