//! In-memory recording bridge
//!
//! Records every handoff instead of delivering it. Backs the CLI's dry-run
//! mode and the pipeline tests, which assert on which entry point fired and
//! with how many points.

use super::traits::MapBridge;
use crate::core::points::Batch;
use std::cell::RefCell;

/// One recorded handoff.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordedHandoff {
    /// Direct entry point fired
    Direct {
        /// Points in the handed-off batch
        point_count: usize,
        /// Export-mode flag as passed through
        export_mode: bool,
    },
    /// Paged entry point fired
    Paged {
        /// Number of wrapped batches
        batch_count: usize,
        /// Total points across all batches
        point_count: usize,
        /// Provider content identifier
        provider_address: String,
        /// Export-mode flag as passed through
        export_mode: bool,
    },
}

/// Bridge that records handoffs in memory.
///
/// Interior mutability keeps the [`MapBridge`] methods `&self`; the pipeline
/// is single-threaded per call, so a `RefCell` suffices.
#[derive(Debug, Default)]
pub struct RecordingBridge {
    handoffs: RefCell<Vec<RecordedHandoff>>,
}

impl RecordingBridge {
    /// Creates an empty recording bridge
    pub fn new() -> Self {
        Self::default()
    }

    /// All handoffs recorded so far, in order
    pub fn handoffs(&self) -> Vec<RecordedHandoff> {
        self.handoffs.borrow().clone()
    }

    /// Number of recorded handoffs
    pub fn handoff_count(&self) -> usize {
        self.handoffs.borrow().len()
    }
}

impl MapBridge for RecordingBridge {
    fn is_available(&self) -> bool {
        true
    }

    fn send_batch(&self, batch: &Batch, export_mode: bool) {
        self.handoffs.borrow_mut().push(RecordedHandoff::Direct {
            point_count: batch.len(),
            export_mode,
        });
    }

    fn send_batch_paged(&self, batches: &[Batch], provider_address: &str, export_mode: bool) {
        self.handoffs.borrow_mut().push(RecordedHandoff::Paged {
            batch_count: batches.len(),
            point_count: batches.iter().map(Batch::len).sum(),
            provider_address: provider_address.to_string(),
            export_mode,
        });
    }
}
