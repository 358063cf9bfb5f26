pub mod error;
pub mod router;
pub mod sink;
pub mod table;

// Re-export commonly used types
pub use error::RoutingError;
pub use router::Router;
pub use sink::{MemorySink, TransactionSink};
pub use table::{Branch, Destination, RouteTable};
