use std::sync::{Arc, Mutex};

use tokio::sync::mpsc::UnboundedSender;

use super::error::RoutingError;
use super::table::Destination;
use crate::domain::KeyedTransaction;

/// Destination channel for routed records
///
/// Delivery is synchronous and takes ownership of the record; the routing
/// stage never retains a reference past the handoff. Implementations exist
/// for unbounded tokio senders (production wiring) and for [`MemorySink`]
/// (tests, benches, embedders).
pub trait TransactionSink: Send + Sync {
    /// Deliver one record, tagged with the destination it was routed to
    fn deliver(
        &self,
        destination: Destination,
        record: KeyedTransaction,
    ) -> Result<(), RoutingError>;
}

impl TransactionSink for UnboundedSender<KeyedTransaction> {
    fn deliver(
        &self,
        destination: Destination,
        record: KeyedTransaction,
    ) -> Result<(), RoutingError> {
        self.send(record)
            .map_err(|_| RoutingError::SinkClosed { destination })
    }
}

/// In-memory sink collecting routed records in arrival order
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    records: Arc<Mutex<Vec<KeyedTransaction>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the collected records
    pub fn records(&self) -> Vec<KeyedTransaction> {
        self.records.lock().expect("sink lock poisoned").clone()
    }

    pub fn len(&self) -> usize {
        self.records.lock().expect("sink lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl TransactionSink for MemorySink {
    fn deliver(
        &self,
        _destination: Destination,
        record: KeyedTransaction,
    ) -> Result<(), RoutingError> {
        self.records.lock().expect("sink lock poisoned").push(record);
        Ok(())
    }
}
