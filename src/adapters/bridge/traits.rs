//! Bridge abstraction trait
//!
//! This module defines the capability surface the export pipeline consumes
//! from the map application integration.

use crate::core::points::Batch;

/// Handle to the receiving map application.
///
/// Delivery is a single best-effort attempt: the send methods return
/// nothing, and once the transport selector has handed a batch over, any
/// failure below this seam belongs to the implementation (which logs it) or
/// to the map application itself. There is no retry and no partial-failure
/// recovery above this trait.
///
/// Implementations are used from a single thread per export call; no
/// `Send`/`Sync` bound is required.
pub trait MapBridge {
    /// Capability probe: whether the map application can receive data.
    ///
    /// Callers consume this as a precondition before starting an export;
    /// the pipeline itself does not re-check it.
    fn is_available(&self) -> bool;

    /// Hands a single batch to the application's direct receive entry point.
    ///
    /// Used for batches of at most
    /// [`DIRECT_POINT_LIMIT`](crate::core::transport::DIRECT_POINT_LIMIT)
    /// points.
    fn send_batch(&self, batch: &Batch, export_mode: bool);

    /// Hands batches to the application's paged (cursor) receive entry
    /// point, addressed by a provider content identifier.
    ///
    /// Used when the direct entry point would be overwhelmed; the payload is
    /// the same data wrapped in a collection.
    fn send_batch_paged(&self, batches: &[Batch], provider_address: &str, export_mode: bool);
}
