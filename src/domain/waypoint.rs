//! Waypoint domain model
//!
//! A waypoint is a subordinate location attached to a cache (parking, a
//! stage of a multi, the final of a mystery) or a standalone user waypoint.

use super::enums::WaypointKind;
use super::geopoint::Geopoint;
use serde::{Deserialize, Serialize};

/// A subordinate catalog record attached to a geocache.
///
/// Waypoints can be exported two ways: nested inside their parent cache's
/// metadata block, or as standalone export points when they appear directly
/// in the input collection. Coordinates are optional in both cases; a
/// standalone waypoint without coordinates is skipped, a nested one is
/// emitted without a position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaypointRecord {
    /// Lookup code, e.g. "PK" or "S1"
    pub lookup: String,

    /// Display name
    pub name: String,

    /// Free-form user note
    #[serde(default)]
    pub note: String,

    /// Waypoint classification
    pub kind: WaypointKind,

    /// Position, if the user or the listing provided one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coords: Option<Geopoint>,

    /// Geocode of the parent cache
    pub geocode: String,

    /// Listing URL shown when the waypoint is exported standalone
    #[serde(default)]
    pub url: String,
}

impl WaypointRecord {
    /// Creates a new waypoint record
    pub fn new(
        lookup: impl Into<String>,
        name: impl Into<String>,
        kind: WaypointKind,
        geocode: impl Into<String>,
    ) -> Self {
        Self {
            lookup: lookup.into(),
            name: name.into(),
            note: String::new(),
            kind,
            coords: None,
            geocode: geocode.into(),
            url: String::new(),
        }
    }

    /// Sets the coordinates
    pub fn with_coords(mut self, coords: Geopoint) -> Self {
        self.coords = Some(coords);
        self
    }

    /// Sets the user note
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = note.into();
        self
    }

    /// Sets the listing URL
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }
}
