//! Catalog classification enums
//!
//! These are the catalog's own classification schemes. They are independent
//! of the map application's code tables; [`crate::core::translate`] maps
//! between the two. Variants without an external equivalent (user-defined
//! caches, unknown types) are first-class here so that the "unmapped"
//! translation outcome is reachable and testable.

use serde::{Deserialize, Serialize};

/// Cache type as recorded in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CacheType {
    Traditional,
    Multi,
    Mystery,
    Letterbox,
    Event,
    MegaEvent,
    Earth,
    /// Cache-in-trash-out event
    Cito,
    Webcam,
    Virtual,
    Wherigo,
    ProjectApe,
    GpsExhibit,
    /// Locally created cache with no listing-site counterpart
    UserDefined,
    /// Type could not be determined when the record was stored
    #[serde(other)]
    Unknown,
}

impl Default for CacheType {
    fn default() -> Self {
        CacheType::Unknown
    }
}

/// Physical container size tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CacheSize {
    Micro,
    Small,
    Regular,
    Large,
    VeryLarge,
    NotChosen,
    /// Listed virtual caches carry no physical container
    Virtual,
    Other,
    #[serde(other)]
    Unknown,
}

impl Default for CacheSize {
    fn default() -> Self {
        CacheSize::Unknown
    }
}

/// Kind of a subordinate waypoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WaypointKind {
    Final,
    /// User-created waypoint attached to a cache
    Own,
    Parking,
    /// Virtual stage requiring an answer, also known as a question to answer
    Puzzle,
    Stage,
    Trailhead,
    Waypoint,
    /// The cache listing's original (pre-correction) coordinates
    #[serde(other)]
    Original,
}
