//! Prelude module for convenient imports
//!
//! Import everything you need with: `use storeroute::prelude::*;`

// Domain types
pub use crate::domain::{
    Classification, ItemTransaction, KeyedTransaction, OperationType, classify,
};

// Routing types
pub use crate::routing::{
    Branch, Destination, MemorySink, RouteTable, Router, RoutingError, TransactionSink,
};

// Tap types
pub use crate::tap::{LogTap, NoopTap, RecordingTap, StreamTap, TapStage};

// Streaming types
pub use crate::streaming::{
    AbortOnError, ErrorPolicy, RouterResults, RoutingSession, ShardAssignment, SilentSkip,
    SkipErrors, StreamCombinator, StreamRouter,
};

// IO types
pub use crate::io::{IoError, JsonTransactionStream, RawItemRecord, drain_to_writer, write_record};

// App types
pub use crate::app::{AppError, CliApp, Writers};
