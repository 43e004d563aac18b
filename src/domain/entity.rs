//! Geocache domain model and catalog entity dispatch
//!
//! This module defines [`GeocacheRecord`], the primary catalog entity, and
//! [`CatalogEntity`], the tagged union the export pipeline dispatches on.

use super::enums::{CacheSize, CacheType};
use super::geopoint::Geopoint;
use super::waypoint::WaypointRecord;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Rating value meaning "not set" in the catalog.
///
/// Difficulty and terrain come from the catalog as plain floats where
/// anything at or below zero means the rating was never assigned. The
/// builders translate this sentinel into an absent field on export.
pub const RATING_UNSET: f32 = 0.0;

/// A primary catalog record: one geocache with its subordinate waypoints.
///
/// All fields mirror what the catalog stores; nothing here is shaped for the
/// map application. The waypoint collection is `Vec<Option<...>>` because
/// catalog files may carry literal `null` entries inside the array (a
/// tombstone left by waypoint deletion); the export builders skip them.
///
/// # Examples
///
/// ```
/// use waymark::domain::{CacheSize, CacheType, GeocacheRecord, Geopoint};
///
/// let cache = GeocacheRecord::builder("GC1X2Y3", "Old Bridge")
///     .coords(Geopoint::new(50.087, 14.421))
///     .cache_type(CacheType::Traditional)
///     .size(CacheSize::Regular)
///     .difficulty(2.5)
///     .terrain(1.5)
///     .build();
/// assert_eq!(cache.geocode, "GC1X2Y3");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeocacheRecord {
    /// Listing identifier, e.g. "GC1X2Y3"
    pub geocode: String,

    /// Display name
    pub name: String,

    /// Position, absent for caches whose coordinates are not yet known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coords: Option<Geopoint>,

    /// Temporarily disabled by the owner
    #[serde(default)]
    pub disabled: bool,

    /// Permanently archived
    #[serde(default)]
    pub archived: bool,

    /// Visible to premium members only
    #[serde(default)]
    pub premium_only: bool,

    /// Owner display name
    #[serde(default)]
    pub owner: String,

    /// Date the cache was hidden, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hidden: Option<NaiveDate>,

    /// Cache type classification
    #[serde(default)]
    pub cache_type: CacheType,

    /// Container size tier
    #[serde(default)]
    pub size: CacheSize,

    /// Difficulty rating; values <= 0 mean "not set"
    #[serde(default)]
    pub difficulty: f32,

    /// Terrain rating; values <= 0 mean "not set"
    #[serde(default)]
    pub terrain: f32,

    /// Found by the current user
    #[serde(default)]
    pub found: bool,

    /// Short listing description
    #[serde(default)]
    pub short_description: String,

    /// Full listing description
    #[serde(default)]
    pub description: String,

    /// Decoded hint text
    #[serde(default)]
    pub hint: String,

    /// Subordinate waypoints, in catalog order; entries may be null
    #[serde(default)]
    pub waypoints: Vec<Option<WaypointRecord>>,
}

impl GeocacheRecord {
    /// Creates a new builder for constructing a GeocacheRecord
    pub fn builder(geocode: impl Into<String>, name: impl Into<String>) -> GeocacheRecordBuilder {
        GeocacheRecordBuilder::new(geocode, name)
    }

    /// Whether the record carries at least one waypoint entry.
    ///
    /// Null tombstones count here; whether anything survives export is
    /// decided per entry by the cache point builder.
    pub fn has_waypoints(&self) -> bool {
        !self.waypoints.is_empty()
    }
}

/// Builder for constructing GeocacheRecord instances.
///
/// Geocode and name are mandatory and taken up front; everything else
/// defaults to the catalog's "not set" representation.
#[derive(Debug)]
pub struct GeocacheRecordBuilder {
    record: GeocacheRecord,
}

impl GeocacheRecordBuilder {
    /// Creates a builder with the mandatory fields set
    pub fn new(geocode: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            record: GeocacheRecord {
                geocode: geocode.into(),
                name: name.into(),
                coords: None,
                disabled: false,
                archived: false,
                premium_only: false,
                owner: String::new(),
                hidden: None,
                cache_type: CacheType::Unknown,
                size: CacheSize::Unknown,
                difficulty: RATING_UNSET,
                terrain: RATING_UNSET,
                found: false,
                short_description: String::new(),
                description: String::new(),
                hint: String::new(),
                waypoints: Vec::new(),
            },
        }
    }

    /// Sets the coordinates
    pub fn coords(mut self, coords: Geopoint) -> Self {
        self.record.coords = Some(coords);
        self
    }

    /// Sets the disabled flag
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.record.disabled = disabled;
        self
    }

    /// Sets the archived flag
    pub fn archived(mut self, archived: bool) -> Self {
        self.record.archived = archived;
        self
    }

    /// Sets the premium-only flag
    pub fn premium_only(mut self, premium_only: bool) -> Self {
        self.record.premium_only = premium_only;
        self
    }

    /// Sets the owner display name
    pub fn owner(mut self, owner: impl Into<String>) -> Self {
        self.record.owner = owner.into();
        self
    }

    /// Sets the hidden date
    pub fn hidden(mut self, hidden: NaiveDate) -> Self {
        self.record.hidden = Some(hidden);
        self
    }

    /// Sets the cache type
    pub fn cache_type(mut self, cache_type: CacheType) -> Self {
        self.record.cache_type = cache_type;
        self
    }

    /// Sets the container size
    pub fn size(mut self, size: CacheSize) -> Self {
        self.record.size = size;
        self
    }

    /// Sets the difficulty rating
    pub fn difficulty(mut self, difficulty: f32) -> Self {
        self.record.difficulty = difficulty;
        self
    }

    /// Sets the terrain rating
    pub fn terrain(mut self, terrain: f32) -> Self {
        self.record.terrain = terrain;
        self
    }

    /// Sets the found flag
    pub fn found(mut self, found: bool) -> Self {
        self.record.found = found;
        self
    }

    /// Sets the short description
    pub fn short_description(mut self, text: impl Into<String>) -> Self {
        self.record.short_description = text.into();
        self
    }

    /// Sets the full description
    pub fn description(mut self, text: impl Into<String>) -> Self {
        self.record.description = text.into();
        self
    }

    /// Sets the hint text
    pub fn hint(mut self, text: impl Into<String>) -> Self {
        self.record.hint = text.into();
        self
    }

    /// Appends a waypoint
    pub fn waypoint(mut self, waypoint: WaypointRecord) -> Self {
        self.record.waypoints.push(Some(waypoint));
        self
    }

    /// Replaces the whole waypoint collection, null entries included
    pub fn waypoints(mut self, waypoints: Vec<Option<WaypointRecord>>) -> Self {
        self.record.waypoints = waypoints;
        self
    }

    /// Builds the record
    pub fn build(self) -> GeocacheRecord {
        self.record
    }
}

/// One element of the mixed input collection handed to the export pipeline.
///
/// The source system hands over a heterogeneous list of caches and
/// standalone waypoints; this enum closes that dispatch. There is no
/// "something else, ignore it" arm: anything that is neither cannot be
/// represented, which is the type-level form of ignoring it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "entity", rename_all = "lowercase")]
pub enum CatalogEntity {
    /// A primary cache record
    Cache(GeocacheRecord),
    /// A standalone waypoint record
    Waypoint(WaypointRecord),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::enums::WaypointKind;

    #[test]
    fn test_builder_defaults() {
        let cache = GeocacheRecord::builder("GC1234", "Test").build();
        assert!(cache.coords.is_none());
        assert!(!cache.disabled);
        assert_eq!(cache.difficulty, RATING_UNSET);
        assert_eq!(cache.cache_type, CacheType::Unknown);
        assert!(!cache.has_waypoints());
    }

    #[test]
    fn test_has_waypoints_counts_null_entries() {
        let cache = GeocacheRecord::builder("GC1234", "Test")
            .waypoints(vec![None])
            .build();
        assert!(cache.has_waypoints());
    }

    #[test]
    fn test_catalog_entity_tagged_deserialization() {
        let json = r#"[
            {"entity": "cache", "geocode": "GC1", "name": "A",
             "coords": {"latitude": 1.0, "longitude": 2.0},
             "cache_type": "traditional", "size": "micro"},
            {"entity": "waypoint", "lookup": "PK", "name": "Parking",
             "kind": "parking", "geocode": "GC1"}
        ]"#;
        let entities: Vec<CatalogEntity> = serde_json::from_str(json).unwrap();
        assert_eq!(entities.len(), 2);
        assert!(matches!(entities[0], CatalogEntity::Cache(_)));
        assert!(matches!(entities[1], CatalogEntity::Waypoint(_)));
    }

    #[test]
    fn test_waypoint_array_preserves_nulls() {
        let json = r#"{"geocode": "GC1", "name": "A",
            "waypoints": [null, {"lookup": "S1", "name": "Stage 1",
                                 "kind": "stage", "geocode": "GC1"}]}"#;
        let cache: GeocacheRecord = serde_json::from_str(json).unwrap();
        assert_eq!(cache.waypoints.len(), 2);
        assert!(cache.waypoints[0].is_none());
        assert_eq!(
            cache.waypoints[1].as_ref().unwrap().kind,
            WaypointKind::Stage
        );
    }

    #[test]
    fn test_record_serialization_roundtrip() {
        let cache = GeocacheRecord::builder("GC1X2Y3", "Old Bridge")
            .coords(Geopoint::new(50.087, 14.421))
            .cache_type(CacheType::Mystery)
            .size(CacheSize::Small)
            .difficulty(3.0)
            .hidden(NaiveDate::from_ymd_opt(2021, 6, 15).unwrap())
            .build();
        let json = serde_json::to_string(&cache).unwrap();
        let back: GeocacheRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(cache, back);
    }
}
