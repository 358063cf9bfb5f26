pub mod error;
pub mod processor;
pub mod single;

// Re-export commonly used types
pub use error::{AbortOnError, ErrorPolicy, SilentSkip, SkipErrors};
pub use processor::{RouterResults, ShardAssignment, ShardResult, StreamCombinator, StreamRouter};
pub use single::RoutingSession;
