use serde::{Deserialize, Serialize};

/// Kind of inventory movement carried by a transaction
///
/// The routing stage never inspects this field; it is carried through
/// verbatim for downstream consumers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OperationType {
    Restock,
    Sale,
}

/// Immutable item-transaction value as it travels through the pipeline
///
/// `store_name` and `sku` are optional because the wire format allows null
/// for either; presence is a validation outcome, not a structural guarantee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemTransaction {
    pub store_name: Option<String>,
    pub sku: Option<String>,
    pub operation_type: OperationType,
    pub quantity: i64,
    pub unit_price: f64,
}

impl ItemTransaction {
    /// Create a new item transaction
    pub fn new(
        store_name: Option<String>,
        sku: Option<String>,
        operation_type: OperationType,
        quantity: i64,
        unit_price: f64,
    ) -> Self {
        Self {
            store_name,
            sku,
            operation_type,
            quantity,
            unit_price,
        }
    }

    /// Wrap this value in a keyed record, keyed by store name
    ///
    /// Upstream ingestion keys records by store identifier; a transaction
    /// without a store name travels with a null key.
    pub fn into_keyed(self) -> KeyedTransaction {
        KeyedTransaction {
            key: self.store_name.clone(),
            value: self,
        }
    }
}

/// A (key, value) pair on the keyed stream
///
/// The key is the store identifier. The routing stage forwards both halves
/// verbatim; it never retains a record past the single routing decision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyedTransaction {
    pub key: Option<String>,
    pub value: ItemTransaction,
}

impl KeyedTransaction {
    /// Create a keyed record with an explicit key
    pub fn new(key: Option<String>, value: ItemTransaction) -> Self {
        Self { key, value }
    }
}
