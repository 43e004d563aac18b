//! Domain models and types for Waymark.
//!
//! This module contains the catalog-side entities that feed the export
//! pipeline, the classification enums they carry, and the error types used
//! across the crate.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Catalog entities** ([`GeocacheRecord`], [`WaypointRecord`], [`CatalogEntity`])
//! - **Coordinates** ([`Geopoint`])
//! - **Classification enums** ([`CacheType`], [`CacheSize`], [`WaypointKind`])
//! - **Error types** ([`WaymarkError`]) and a [`Result`] alias
//!
//! Catalog entities are plain serde value structs: a catalog file is a JSON
//! array of tagged entities and deserializes directly into
//! `Vec<CatalogEntity>`. None of these types know anything about the map
//! application's interchange format; that lives in [`crate::core::points`].
//!
//! # Error Handling
//!
//! The export pipeline itself never fails with an error: degenerate input is
//! handled by omission (records without coordinates are skipped, unmapped
//! enum variants leave the external field unset, an empty batch yields an
//! unsuccessful result). [`WaymarkError`] covers the surrounding surfaces:
//! configuration loading, catalog parsing and bridge I/O.

pub mod entity;
pub mod enums;
pub mod errors;
pub mod geopoint;
pub mod result;
pub mod waypoint;

// Re-export commonly used types for convenience
pub use entity::{CatalogEntity, GeocacheRecord, GeocacheRecordBuilder};
pub use enums::{CacheSize, CacheType, WaypointKind};
pub use errors::WaymarkError;
pub use geopoint::Geopoint;
pub use result::Result;
pub use waypoint::WaypointRecord;
