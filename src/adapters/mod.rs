//! External system integrations for Waymark.
//!
//! Two boundaries live here: the receiving map application, reached through
//! the [`bridge`] module, and the [`catalog`] file reader that stands in for
//! the application's persistence layer. The bridge follows a trait-based
//! design so the export pipeline can be exercised against a recording double
//! and the CLI can deliver through a JSON file without either knowing the
//! difference.

pub mod bridge;
pub mod catalog;
