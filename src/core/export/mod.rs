//! Export pipeline: builders, assembly, summary
//!
//! One export call flows through this module top to bottom:
//!
//! 1. [`BatchAssembler::export`] classifies each input entity
//! 2. [`cache::build_cache_point`] / [`waypoint::build_waypoint_point`] map
//!    entities to points, dropping anything without coordinates
//! 3. the surviving points are batched in input order and handed to
//!    [`crate::core::transport::dispatch_batch`]
//! 4. the caller gets an [`ExportSummary`], or `None` when nothing was sent

pub mod assembler;
pub mod cache;
pub mod summary;
pub mod waypoint;

pub use assembler::{BatchAssembler, DETAIL_THRESHOLD};
pub use cache::build_cache_point;
pub use summary::ExportSummary;
pub use waypoint::build_waypoint_point;
