use serde::Deserialize;

use super::error::IoError;
use crate::domain::{ItemTransaction, KeyedTransaction, OperationType};

/// Raw wire record as read from a JSON line
///
/// Tolerant shape: `storeName` and `sku` may be null or absent (that is a
/// validation outcome, not a decode failure), while an unknown operation
/// type is a decode failure owned by this layer.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawItemRecord {
    #[serde(default)]
    pub store_name: Option<String>,
    #[serde(default)]
    pub sku: Option<String>,
    pub operation_type: String,
    pub quantity: i64,
    pub unit_price: f64,
}

impl RawItemRecord {
    /// Parse this raw record into a keyed transaction
    ///
    /// The key is the store identifier, absent when the record carries none.
    pub fn parse(self) -> Result<KeyedTransaction, IoError> {
        let operation_type = match self.operation_type.trim().to_uppercase().as_str() {
            "RESTOCK" => OperationType::Restock,
            "SALE" => OperationType::Sale,
            _ => return Err(IoError::InvalidOperationType(self.operation_type)),
        };

        Ok(ItemTransaction::new(
            self.store_name,
            self.sku,
            operation_type,
            self.quantity,
            self.unit_price,
        )
        .into_keyed())
    }
}
