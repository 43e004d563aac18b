//! Map application interchange structures
//!
//! The receiving map application defines its own per-location display unit
//! (a point, optionally carrying a geocaching metadata block) and its own
//! classification code tables. These are vendor-defined shapes; here they
//! are reimplemented as independent plain value structs owned solely by the
//! export call. They are translation targets, not the internal model, and
//! nothing in the catalog layer depends on them.
//!
//! All structs serialize with serde; the JSON bridge hands exactly this
//! shape over, with the symbolic code strings of the external contract
//! (`CACHE_TYPE_TRADITIONAL`, `WAYPOINT_TYPE_STAGES`, ...) appearing
//! verbatim in the payload.

use serde::{Deserialize, Serialize};

/// Fixed label attached to every batch, identifying the sending application.
pub const BATCH_SOURCE_TAG: &str = "waymark";

/// Cache type codes recognized by the map application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CacheTypeCode {
    #[serde(rename = "CACHE_TYPE_TRADITIONAL")]
    Traditional,
    #[serde(rename = "CACHE_TYPE_MULTI")]
    Multi,
    #[serde(rename = "CACHE_TYPE_MYSTERY")]
    Mystery,
    #[serde(rename = "CACHE_TYPE_LETTERBOX")]
    Letterbox,
    #[serde(rename = "CACHE_TYPE_EVENT")]
    Event,
    #[serde(rename = "CACHE_TYPE_MEGA_EVENT")]
    MegaEvent,
    #[serde(rename = "CACHE_TYPE_EARTH")]
    Earth,
    #[serde(rename = "CACHE_TYPE_CACHE_IN_TRASH_OUT")]
    CacheInTrashOut,
    #[serde(rename = "CACHE_TYPE_WEBCAM")]
    Webcam,
    #[serde(rename = "CACHE_TYPE_VIRTUAL")]
    Virtual,
    #[serde(rename = "CACHE_TYPE_WHERIGO")]
    Wherigo,
    #[serde(rename = "CACHE_TYPE_PROJECT_APE")]
    ProjectApe,
    #[serde(rename = "CACHE_TYPE_GPS_ADVENTURE")]
    GpsAdventure,
}

/// Container size codes recognized by the map application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CacheSizeCode {
    #[serde(rename = "CACHE_SIZE_MICRO")]
    Micro,
    #[serde(rename = "CACHE_SIZE_SMALL")]
    Small,
    #[serde(rename = "CACHE_SIZE_REGULAR")]
    Regular,
    #[serde(rename = "CACHE_SIZE_LARGE")]
    Large,
    #[serde(rename = "CACHE_SIZE_NOT_CHOSEN")]
    NotChosen,
    #[serde(rename = "CACHE_SIZE_OTHER")]
    Other,
}

/// Waypoint type codes recognized by the map application.
///
/// This set is smaller than the catalog's [`crate::domain::WaypointKind`];
/// several catalog kinds collapse onto [`WaypointKindCode::Stages`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WaypointKindCode {
    #[serde(rename = "WAYPOINT_TYPE_FINAL")]
    Final,
    #[serde(rename = "WAYPOINT_TYPE_STAGES")]
    Stages,
    #[serde(rename = "WAYPOINT_TYPE_PARKING")]
    Parking,
    #[serde(rename = "WAYPOINT_TYPE_QUESTION")]
    Question,
    #[serde(rename = "WAYPOINT_TYPE_TRAILHEAD")]
    Trailhead,
}

/// A waypoint nested inside a cache's metadata block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportWaypoint {
    /// Lookup code copied from the catalog record
    pub code: String,

    /// Display name
    pub name: String,

    /// User note, shown as the waypoint description
    pub description: String,

    /// External waypoint type; unset when the catalog kind has no mapping
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<WaypointKindCode>,

    /// Latitude, when the catalog record has coordinates
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,

    /// Longitude, when the catalog record has coordinates
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
}

/// Geocaching metadata attached to an exported cache point.
///
/// Every `Option` field means "set iff the source had a usable value":
/// unmapped codes, unset ratings and a missing hidden date are omitted
/// rather than encoded as sentinels. The three detail fields are populated
/// only in detail mode (small batches).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheMetadata {
    /// Listing identifier
    pub cache_id: String,

    /// Inverse of the catalog's disabled flag
    pub available: bool,

    /// Archived flag, copied
    pub archived: bool,

    /// Premium-only flag, copied
    pub premium_only: bool,

    /// Cache display name
    pub name: String,

    /// Owner display name
    pub placed_by: String,

    /// Hidden date formatted as "YYYY-MM-DDT", when known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hidden: Option<String>,

    /// External cache type code, when the catalog type maps
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cache_type: Option<CacheTypeCode>,

    /// External container size code, when the catalog size maps
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container: Option<CacheSizeCode>,

    /// Difficulty rating, when set (> 0) in the catalog
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<f32>,

    /// Terrain rating, when set (> 0) in the catalog
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terrain: Option<f32>,

    /// Found flag, copied
    pub found: bool,

    /// Nested waypoints, present iff waypoint inclusion was requested and
    /// the cache carries at least one waypoint entry
    #[serde(skip_serializing_if = "Option::is_none")]
    pub waypoints: Option<Vec<ExportWaypoint>>,

    /// Short listing description; detail mode only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_description: Option<String>,

    /// Full listing description; detail mode only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub long_description: Option<String>,

    /// Hint text; detail mode only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encoded_hints: Option<String>,
}

/// One per-location display unit handed to the map application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportPoint {
    /// Display name
    pub name: String,

    /// Latitude in decimal degrees
    pub latitude: f64,

    /// Longitude in decimal degrees
    pub longitude: f64,

    /// Free-form description; used by standalone waypoint points
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Geocaching metadata; present on cache points only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geocaching: Option<CacheMetadata>,
}

impl ExportPoint {
    /// Creates a bare point with name and position
    pub fn new(name: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            name: name.into(),
            latitude,
            longitude,
            description: None,
            geocaching: None,
        }
    }
}

/// A named, ordered group of export points delivered in one transfer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Batch {
    /// Batch label, always [`BATCH_SOURCE_TAG`]
    pub name: String,

    /// Points in input order
    pub points: Vec<ExportPoint>,
}

impl Batch {
    /// Creates an empty batch carrying the fixed source tag
    pub fn new() -> Self {
        Self {
            name: BATCH_SOURCE_TAG.to_string(),
            points: Vec::new(),
        }
    }

    /// Appends a point, preserving insertion order
    pub fn add_point(&mut self, point: ExportPoint) {
        self.points.push(point);
    }

    /// Number of points in the batch
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the batch holds no points
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl Default for Batch {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_carries_source_tag() {
        let batch = Batch::new();
        assert_eq!(batch.name, "waymark");
        assert!(batch.is_empty());
    }

    #[test]
    fn test_batch_preserves_insertion_order() {
        let mut batch = Batch::new();
        batch.add_point(ExportPoint::new("first", 1.0, 1.0));
        batch.add_point(ExportPoint::new("second", 2.0, 2.0));
        assert_eq!(batch.len(), 2);
        assert_eq!(batch.points[0].name, "first");
        assert_eq!(batch.points[1].name, "second");
    }

    #[test]
    fn test_symbolic_codes_serialize_verbatim() {
        assert_eq!(
            serde_json::to_string(&CacheTypeCode::CacheInTrashOut).unwrap(),
            "\"CACHE_TYPE_CACHE_IN_TRASH_OUT\""
        );
        assert_eq!(
            serde_json::to_string(&CacheTypeCode::GpsAdventure).unwrap(),
            "\"CACHE_TYPE_GPS_ADVENTURE\""
        );
        assert_eq!(
            serde_json::to_string(&CacheSizeCode::NotChosen).unwrap(),
            "\"CACHE_SIZE_NOT_CHOSEN\""
        );
        assert_eq!(
            serde_json::to_string(&WaypointKindCode::Question).unwrap(),
            "\"WAYPOINT_TYPE_QUESTION\""
        );
    }

    #[test]
    fn test_unset_optional_fields_are_omitted_from_payload() {
        let point = ExportPoint::new("bare", 10.0, 20.0);
        let json = serde_json::to_value(&point).unwrap();
        let obj = json.as_object().unwrap();
        assert!(!obj.contains_key("description"));
        assert!(!obj.contains_key("geocaching"));
    }
}
