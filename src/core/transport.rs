//! Transport selection for batch handoff
//!
//! The map application exposes two receive entry points. The direct one
//! takes a single batch in one synchronous call but becomes unreliable
//! somewhere above a thousand points; the paged (cursor) one trades a little
//! overhead for robustness at scale and is addressed by a provider content
//! identifier. Selection is purely by output size and happens exactly once
//! per export call.

use crate::adapters::bridge::MapBridge;
use crate::core::points::Batch;
use serde::{Deserialize, Serialize};

/// Largest batch the direct entry point is trusted with.
///
/// Part of the external contract, not configuration.
pub const DIRECT_POINT_LIMIT: usize = 1000;

/// Well-known name of the storage provider backing the paged entry point.
pub const PROVIDER_NAME: &str = "net.waymark.StorageProvider";

/// Content identifier the paged entry point is addressed by.
pub fn provider_address() -> String {
    format!("content://{}", PROVIDER_NAME.to_lowercase())
}

/// Which entry point a batch was delivered through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Transport {
    /// Single synchronous receive call
    Direct,
    /// Cursor-based receive addressed by the provider identifier
    Paged,
}

/// Hands a finished, non-empty batch to the map application.
///
/// Returns the transport that was used. Once this function is reached the
/// handoff counts as successful; whatever happens below the bridge seam is
/// the implementation's (or the map application's) concern.
pub fn dispatch_batch(batch: Batch, export_mode: bool, bridge: &dyn MapBridge) -> Transport {
    if batch.len() <= DIRECT_POINT_LIMIT {
        tracing::debug!(points = batch.len(), "Dispatching batch directly");
        bridge.send_batch(&batch, export_mode);
        Transport::Direct
    } else {
        tracing::debug!(points = batch.len(), "Dispatching batch via paged provider");
        let address = provider_address();
        bridge.send_batch_paged(&[batch], &address, export_mode);
        Transport::Paged
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::bridge::{RecordedHandoff, RecordingBridge};
    use crate::core::points::ExportPoint;

    fn batch_of(n: usize) -> Batch {
        let mut batch = Batch::new();
        for i in 0..n {
            batch.add_point(ExportPoint::new(format!("P{i}"), 1.0, 2.0));
        }
        batch
    }

    #[test]
    fn test_provider_address_is_lowercased_content_uri() {
        assert_eq!(provider_address(), "content://net.waymark.storageprovider");
    }

    #[test]
    fn test_batch_at_limit_goes_direct() {
        let bridge = RecordingBridge::new();
        let transport = dispatch_batch(batch_of(DIRECT_POINT_LIMIT), false, &bridge);
        assert_eq!(transport, Transport::Direct);
        assert_eq!(
            bridge.handoffs(),
            vec![RecordedHandoff::Direct {
                point_count: DIRECT_POINT_LIMIT,
                export_mode: false,
            }]
        );
    }

    #[test]
    fn test_batch_above_limit_goes_paged_wrapped_in_one() {
        let bridge = RecordingBridge::new();
        let transport = dispatch_batch(batch_of(DIRECT_POINT_LIMIT + 1), true, &bridge);
        assert_eq!(transport, Transport::Paged);
        match &bridge.handoffs()[0] {
            RecordedHandoff::Paged {
                batch_count,
                point_count,
                provider_address: address,
                export_mode,
            } => {
                assert_eq!(*batch_count, 1);
                assert_eq!(*point_count, DIRECT_POINT_LIMIT + 1);
                assert_eq!(address, "content://net.waymark.storageprovider");
                assert!(export_mode);
            }
            other => panic!("expected paged handoff, got {other:?}"),
        }
    }

    #[test]
    fn test_exactly_one_handoff_per_dispatch() {
        let bridge = RecordingBridge::new();
        dispatch_batch(batch_of(1), false, &bridge);
        dispatch_batch(batch_of(1500), false, &bridge);
        assert_eq!(bridge.handoff_count(), 2);
    }
}
