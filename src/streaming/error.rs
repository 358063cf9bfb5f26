use tracing::warn;

use crate::io::IoError;
use crate::routing::RoutingError;

/// Policy for handling errors while driving a stream through the router
///
/// Decode errors happen strictly before a record reaches the router and are
/// the ingestion layer's outcome; routing errors mean a destination sink can
/// no longer accept records. Handlers return true to continue processing,
/// false to abort the stream.
pub trait ErrorPolicy: Send + Sync {
    /// Handle a decode error (malformed input line)
    fn handle_decode_error(&self, error: IoError) -> bool;

    /// Handle a routing error (closed destination sink)
    fn handle_routing_error(&self, error: RoutingError) -> bool;
}

/// Log errors and keep going
#[derive(Debug, Clone, Copy)]
pub struct SkipErrors;

impl ErrorPolicy for SkipErrors {
    fn handle_decode_error(&self, error: IoError) -> bool {
        warn!(%error, "decode error, skipping record");
        true
    }

    fn handle_routing_error(&self, error: RoutingError) -> bool {
        warn!(%error, "routing error, skipping record");
        true
    }
}

/// Abort the stream on the first error
#[derive(Debug, Clone, Copy)]
pub struct AbortOnError;

impl ErrorPolicy for AbortOnError {
    fn handle_decode_error(&self, error: IoError) -> bool {
        warn!(%error, "decode error, aborting");
        false
    }

    fn handle_routing_error(&self, error: RoutingError) -> bool {
        warn!(%error, "routing error, aborting");
        false
    }
}

/// Skip errors without logging
#[derive(Debug, Clone, Copy)]
pub struct SilentSkip;

impl ErrorPolicy for SilentSkip {
    fn handle_decode_error(&self, _error: IoError) -> bool {
        true
    }

    fn handle_routing_error(&self, _error: RoutingError) -> bool {
        true
    }
}
