use std::pin::Pin;

use futures::stream;
use futures::{Stream, StreamExt};

use super::error::ErrorPolicy;
use crate::domain::KeyedTransaction;
use crate::io::IoError;
use crate::routing::{Router, TransactionSink};
use crate::tap::StreamTap;

/// Type alias for a boxed keyed-transaction stream
type RecordStream = Pin<Box<dyn Stream<Item = Result<KeyedTransaction, IoError>> + Send>>;

/// Multi-stream routing topology
///
/// Assigns input streams to shards, combines the streams within each shard,
/// and spawns one tokio task per shard, each driving a clone of the router.
/// A stream is never split across shards, so records sharing a key stay in
/// arrival order as long as they arrive on one stream.
pub struct StreamRouter<V, D, O, P>
where
    V: TransactionSink + Clone + Send + Sync + 'static,
    D: TransactionSink + Clone + Send + Sync + 'static,
    O: StreamTap + Clone + Send + Sync + 'static,
    P: ErrorPolicy + Clone + Send + 'static,
{
    router: Router<V, D, O>,
    error_policy: P,
    num_shards: usize,
    streams: Vec<RecordStream>,
    shard_assignment: ShardAssignment,
    stream_combinator: StreamCombinator,
}

/// How to assign input streams to shards
pub enum ShardAssignment {
    /// Distribute streams round-robin across shards (default)
    RoundRobin,

    /// Assign streams sequentially: first N/S streams to shard 0, next N/S to
    /// shard 1, ...
    Sequential,

    /// Custom assignment function: stream_index -> shard_index
    Custom(Box<dyn Fn(usize) -> usize + Send + Sync>),
}

/// How to combine multiple streams within a single shard
#[derive(Debug, Clone, Copy)]
pub enum StreamCombinator {
    /// Merge streams concurrently, interleaved (default)
    Merge,

    /// Chain streams one after another, for order-dependent streams
    Chain,
}

impl<V, D, O, P> StreamRouter<V, D, O, P>
where
    V: TransactionSink + Clone + Send + Sync + 'static,
    D: TransactionSink + Clone + Send + Sync + 'static,
    O: StreamTap + Clone + Send + Sync + 'static,
    P: ErrorPolicy + Clone + Send + 'static,
{
    /// Create a topology around a router; streams are added fluently
    pub fn new(router: Router<V, D, O>, error_policy: P) -> Self {
        Self {
            router,
            error_policy,
            num_shards: 1,
            streams: Vec::new(),
            shard_assignment: ShardAssignment::RoundRobin,
            stream_combinator: StreamCombinator::Merge,
        }
    }

    /// Set number of parallel shards (defaults to 1)
    pub fn with_shards(mut self, num: usize) -> Self {
        self.num_shards = num.max(1);
        self
    }

    /// Set how streams are assigned to shards (defaults to RoundRobin)
    pub fn with_shard_assignment(mut self, assignment: ShardAssignment) -> Self {
        self.shard_assignment = assignment;
        self
    }

    /// Set how streams within a shard are combined (defaults to Merge)
    pub fn with_stream_combinator(mut self, combinator: StreamCombinator) -> Self {
        self.stream_combinator = combinator;
        self
    }

    /// Add an input stream
    pub fn add_stream<S>(mut self, stream: S) -> Self
    where
        S: Stream<Item = Result<KeyedTransaction, IoError>> + Send + 'static,
    {
        self.streams.push(Box::pin(stream));
        self
    }

    /// Route all streams across the configured shards
    pub async fn route_all(self) -> RouterResults {
        let num_streams = self.streams.len();

        if num_streams == 0 {
            return RouterResults {
                shard_results: vec![],
                total_streams: 0,
            };
        }

        let StreamRouter {
            router,
            error_policy,
            num_shards,
            streams,
            shard_assignment,
            stream_combinator,
        } = self;

        // Assign streams to shards
        let mut shards: Vec<Vec<_>> = (0..num_shards).map(|_| Vec::new()).collect();

        for (stream_idx, stream) in streams.into_iter().enumerate() {
            let shard_idx = match &shard_assignment {
                ShardAssignment::RoundRobin => stream_idx % num_shards,
                ShardAssignment::Sequential => {
                    let chunk_size = num_streams.div_ceil(num_shards);
                    (stream_idx / chunk_size).min(num_shards - 1)
                }
                ShardAssignment::Custom(f) => f(stream_idx) % num_shards,
            };

            shards[shard_idx].push(stream);
        }

        // Spawn one task per shard
        let handles: Vec<_> = shards
            .into_iter()
            .enumerate()
            .map(|(shard_id, shard_streams)| {
                let router = router.clone();
                let policy = error_policy.clone();
                let combinator = stream_combinator;

                tokio::spawn(async move {
                    if shard_streams.is_empty() {
                        return ShardResult {
                            shard_id,
                            streams_routed: 0,
                            completed: true,
                        };
                    }

                    let stream_count = shard_streams.len();

                    let combined = match combinator {
                        StreamCombinator::Merge => Box::pin(stream::select_all(shard_streams))
                            as Pin<Box<dyn Stream<Item = _> + Send>>,
                        StreamCombinator::Chain => Box::pin(stream::iter(shard_streams).flatten())
                            as Pin<Box<dyn Stream<Item = _> + Send>>,
                    };

                    let completed = Self::route_shard_stream(combined, router, policy).await;

                    ShardResult {
                        shard_id,
                        streams_routed: stream_count,
                        completed,
                    }
                })
            })
            .collect();

        let mut shard_results = Vec::new();
        for handle in handles {
            shard_results.push(handle.await.unwrap_or(ShardResult {
                shard_id: 0,
                streams_routed: 0,
                completed: false,
            }));
        }

        RouterResults {
            shard_results,
            total_streams: num_streams,
        }
    }

    /// Route a single shard's combined stream
    async fn route_shard_stream<S>(mut stream: S, router: Router<V, D, O>, policy: P) -> bool
    where
        S: Stream<Item = Result<KeyedTransaction, IoError>> + Unpin,
    {
        while let Some(result) = stream.next().await {
            match result {
                Ok(record) => {
                    if let Err(e) = router.route(record)
                        && !policy.handle_routing_error(e)
                    {
                        return false;
                    }
                }
                Err(e) => {
                    if !policy.handle_decode_error(e) {
                        return false;
                    }
                }
            }
        }

        true
    }
}

/// Results from routing streams across multiple shards
#[derive(Debug)]
pub struct RouterResults {
    pub shard_results: Vec<ShardResult>,
    pub total_streams: usize,
}

/// Result from one shard
#[derive(Debug)]
pub struct ShardResult {
    pub shard_id: usize,
    pub streams_routed: usize,
    pub completed: bool,
}

impl RouterResults {
    /// Check whether every shard ran its streams to completion
    pub fn all_completed(&self) -> bool {
        self.shard_results.iter().all(|r| r.completed)
    }

    /// Get total number of shards
    pub fn total_shards(&self) -> usize {
        self.shard_results.len()
    }
}
