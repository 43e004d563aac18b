//! Geographic coordinates
//!
//! A plain latitude/longitude pair in decimal degrees, WGS84.

use serde::{Deserialize, Serialize};

/// A geographic position in decimal degrees.
///
/// Coordinates are optional on every catalog entity; a record without a
/// `Geopoint` is not exportable and is silently skipped by the builders.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Geopoint {
    /// Latitude in decimal degrees, positive north
    pub latitude: f64,

    /// Longitude in decimal degrees, positive east
    pub longitude: f64,
}

impl Geopoint {
    /// Creates a new coordinate pair
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}
