// Waymark - Geocache catalog export tool
// Copyright (c) 2026 Waymark Contributors
// Licensed under the MIT License

//! # Waymark - geocache catalog export
//!
//! Waymark bridges an internal catalog of location-tagged geocache records
//! (and their subordinate waypoints) to the interchange format of a
//! companion map application, handing the batch off through one of two
//! transport strategies depending on volume.
//!
//! ## Overview
//!
//! One export call is a straight-line pipeline:
//!
//! - **Classify** each input entity as a cache or a standalone waypoint
//! - **Build** an export point per entity, translating between the
//!   catalog's and the map application's classification schemes
//! - **Reduce** detail for large inputs (descriptions and hints are
//!   dropped once the input reaches 200 records)
//! - **Deliver** the batch directly, or through the paged provider when it
//!   outgrows the direct entry point (1000 points)
//!
//! Everything degenerate is handled by omission: records without
//! coordinates are skipped, unmapped classifications leave the external
//! field unset, and an empty result simply reports failure. The pipeline is
//! synchronous, builds everything fresh per call, and persists nothing.
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Business logic (points, translation, export, transport)
//! - [`adapters`] - External boundaries (map application bridge, catalog file)
//! - [`domain`] - Catalog entities, classification enums, errors
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging setup
//! - [`util`] - Date formatting
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use waymark::adapters::bridge::JsonBridge;
//! use waymark::adapters::catalog::load_catalog;
//! use waymark::core::export::BatchAssembler;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let entities = load_catalog("catalog.json")?;
//!     let bridge = JsonBridge::new("handoff.json");
//!
//!     let outcome = BatchAssembler::new(&bridge)
//!         .with_waypoints(true)
//!         .export(&entities);
//!
//!     match outcome {
//!         Some(summary) => println!("{summary}"),
//!         None => println!("nothing to export"),
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! The pipeline itself reports failure by outcome, not by error; see
//! [`domain::WaymarkError`] for the errors raised by the surrounding
//! surfaces (configuration, catalog parsing, bridge plumbing).
//!
//! ## Logging
//!
//! Waymark uses structured logging with the `tracing` crate:
//!
//! ```rust,no_run
//! use tracing::{info, warn};
//!
//! info!(points = 42, "Batch handed off");
//! warn!("Nothing to export, input collection is empty");
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
pub mod util;
