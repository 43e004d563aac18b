//! Export summary and reporting
//!
//! The pipeline's contract with its caller is a success/failure outcome; the
//! summary adds the numbers worth logging and showing in the CLI.

use crate::core::transport::Transport;
use serde::Serialize;

/// Summary of one successful export call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportSummary {
    /// Entities in the input collection
    pub input_count: usize,

    /// Points handed to the map application
    pub point_count: usize,

    /// Entities dropped for missing coordinates
    pub skipped: usize,

    /// Whether descriptions and hints were included
    pub detail_mode: bool,

    /// Entry point the batch went through
    pub transport: Transport,
}

impl std::fmt::Display for ExportSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} of {} entities exported ({} skipped, details {}, {} transport)",
            self.point_count,
            self.input_count,
            self.skipped,
            if self.detail_mode { "on" } else { "off" },
            match self.transport {
                Transport::Direct => "direct",
                Transport::Paged => "paged",
            }
        )
    }
}
