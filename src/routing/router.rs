use std::sync::Arc;

use tracing::debug;

use super::error::RoutingError;
use super::sink::TransactionSink;
use super::table::{Destination, RouteTable};
use crate::domain::KeyedTransaction;
use crate::tap::{NoopTap, StreamTap, TapStage};

/// Routes each keyed transaction to exactly one destination sink
///
/// The router evaluates its table exactly once per record and forwards key
/// and value verbatim; no annotation, no enrichment, no buffering, no state
/// carried across records. The table is shared behind an `Arc` so clones of
/// the router (one per shard) decide identically.
pub struct Router<V, D, O = NoopTap>
where
    V: TransactionSink,
    D: TransactionSink,
    O: StreamTap,
{
    table: Arc<RouteTable<Destination>>,
    valid_sink: V,
    dead_letter_sink: D,
    tap: O,
}

impl<V, D> Router<V, D, NoopTap>
where
    V: TransactionSink,
    D: TransactionSink,
{
    /// Create a router over the standard topology with no tap
    pub fn new(valid_sink: V, dead_letter_sink: D) -> Self {
        Self {
            table: Arc::new(RouteTable::standard()),
            valid_sink,
            dead_letter_sink,
            tap: NoopTap,
        }
    }
}

impl<V, D, O> Router<V, D, O>
where
    V: TransactionSink,
    D: TransactionSink,
    O: StreamTap,
{
    /// Replace the routing table
    pub fn with_table(mut self, table: RouteTable<Destination>) -> Self {
        self.table = Arc::new(table);
        self
    }

    /// Attach a diagnostic tap
    pub fn with_tap<O2: StreamTap>(self, tap: O2) -> Router<V, D, O2> {
        Router {
            table: self.table,
            valid_sink: self.valid_sink,
            dead_letter_sink: self.dead_letter_sink,
            tap,
        }
    }

    /// Route one record to exactly one destination
    ///
    /// Returns the destination the record was delivered to. Fails only when
    /// the selected sink can no longer accept records; the decision itself is
    /// total and cannot fail.
    pub fn route(&self, record: KeyedTransaction) -> Result<Destination, RoutingError> {
        self.tap.observe(TapStage::PreBranch, &record);

        let destination = self.table.select(&record.value);
        debug!(
            destination = %destination,
            key = record.key.as_deref().unwrap_or("<null>"),
            "routing record"
        );

        match destination {
            Destination::Valid => {
                self.tap.observe(TapStage::PostBranchValid, &record);
                self.valid_sink.deliver(destination, record)?;
            }
            Destination::DeadLetter => {
                self.tap.observe(TapStage::PostBranchDeadLetter, &record);
                self.dead_letter_sink.deliver(destination, record)?;
            }
        }

        Ok(destination)
    }

    /// The routing table in use
    pub fn table(&self) -> &RouteTable<Destination> {
        &self.table
    }
}

impl<V, D, O> Clone for Router<V, D, O>
where
    V: TransactionSink + Clone,
    D: TransactionSink + Clone,
    O: StreamTap + Clone,
{
    fn clone(&self) -> Self {
        Self {
            table: Arc::clone(&self.table),
            valid_sink: self.valid_sink.clone(),
            dead_letter_sink: self.dead_letter_sink.clone(),
            tap: self.tap.clone(),
        }
    }
}
