//! Core business logic for Waymark.
//!
//! # Modules
//!
//! - [`points`] - the map application's interchange value structs
//! - [`translate`] - enum translation between the two classification schemes
//! - [`export`] - point builders, batch assembly and the export summary
//! - [`transport`] - direct vs. paged handoff selection
//!
//! # Export Workflow
//!
//! 1. **Classify**: each input entity is a cache or a standalone waypoint
//! 2. **Build**: map fields onto an export point; skip records without
//!    coordinates; translate enums, omitting unmapped codes
//! 3. **Reduce**: drop descriptions and hints when the input is large
//! 4. **Deliver**: hand the batch off directly, or through the paged
//!    provider when it outgrows the direct entry point
//!
//! # Example
//!
//! ```rust,no_run
//! use waymark::adapters::bridge::JsonBridge;
//! use waymark::core::export::BatchAssembler;
//! use waymark::domain::CatalogEntity;
//!
//! # fn example(entities: Vec<CatalogEntity>) {
//! let bridge = JsonBridge::new("handoff.json");
//! let outcome = BatchAssembler::new(&bridge)
//!     .with_waypoints(true)
//!     .export(&entities);
//!
//! match outcome {
//!     Some(summary) => println!("{summary}"),
//!     None => println!("nothing to export"),
//! }
//! # }
//! ```

pub mod export;
pub mod points;
pub mod translate;
pub mod transport;
