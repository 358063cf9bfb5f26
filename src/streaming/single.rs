use futures::{Stream, StreamExt};

use super::error::ErrorPolicy;
use crate::domain::KeyedTransaction;
use crate::io::IoError;
use crate::routing::{Router, TransactionSink};
use crate::tap::StreamTap;

/// Drives one stream of keyed transactions through a router
pub struct RoutingSession<V, D, O, P>
where
    V: TransactionSink,
    D: TransactionSink,
    O: StreamTap,
    P: ErrorPolicy,
{
    router: Router<V, D, O>,
    error_policy: P,
}

impl<V, D, O, P> RoutingSession<V, D, O, P>
where
    V: TransactionSink,
    D: TransactionSink,
    O: StreamTap,
    P: ErrorPolicy,
{
    /// Create a new routing session
    pub fn new(router: Router<V, D, O>, error_policy: P) -> Self {
        Self {
            router,
            error_policy,
        }
    }

    /// Route every record on the stream, one at a time, in arrival order
    ///
    /// Returns true if the stream ran to completion (errors skipped per
    /// policy), false if the policy aborted processing.
    pub async fn route_stream<S>(&mut self, mut stream: S) -> bool
    where
        S: Stream<Item = Result<KeyedTransaction, IoError>> + Unpin,
    {
        while let Some(result) = stream.next().await {
            match result {
                Ok(record) => {
                    if let Err(e) = self.router.route(record)
                        && !self.error_policy.handle_routing_error(e)
                    {
                        return false;
                    }
                }
                Err(e) => {
                    if !self.error_policy.handle_decode_error(e) {
                        return false;
                    }
                }
            }
        }

        true
    }

    /// Get a reference to the underlying router
    pub fn router(&self) -> &Router<V, D, O> {
        &self.router
    }

    /// Consume the session and return the router
    pub fn into_router(self) -> Router<V, D, O> {
        self.router
    }
}
