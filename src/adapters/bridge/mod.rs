//! Map application bridge
//!
//! The bridge is the crate's delivery seam: the transport selector decides
//! which entry point to use, the bridge implementation decides what "handing
//! a batch to the map application" physically means.
//!
//! - [`MapBridge`] - the capability surface consumed by the pipeline
//! - [`JsonBridge`] - writes the handed-off payload as a JSON file
//! - [`RecordingBridge`] - records handoffs in memory (dry runs, tests)

pub mod json;
pub mod recording;
pub mod traits;

pub use json::JsonBridge;
pub use recording::{RecordedHandoff, RecordingBridge};
pub use traits::MapBridge;
