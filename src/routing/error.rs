use thiserror::Error;

use super::table::Destination;

/// Routing-level errors
///
/// The routing decision itself cannot fail for a well-formed value; the only
/// failure mode is a destination that can no longer accept records.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RoutingError {
    #[error("{destination} sink is closed")]
    SinkClosed { destination: Destination },
}
