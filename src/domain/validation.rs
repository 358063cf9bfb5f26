use super::item::ItemTransaction;

/// Outcome of classifying a single transaction
///
/// A validation failure is a normal classification outcome, not an error:
/// the router recovers by sending the record to the dead-letter channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Valid,
    Invalid,
}

impl Classification {
    pub fn is_valid(self) -> bool {
        self == Classification::Valid
    }
}

/// Classify one transaction by mandatory-field presence
///
/// Total and pure: never fails for any structurally present value, including
/// one with null or empty fields. A transaction is `Valid` iff `store_name`
/// and `sku` are both present and non-empty. No other field is inspected.
pub fn classify(tx: &ItemTransaction) -> Classification {
    if is_blank(&tx.store_name) || is_blank(&tx.sku) {
        Classification::Invalid
    } else {
        Classification::Valid
    }
}

fn is_blank(field: &Option<String>) -> bool {
    field.as_deref().is_none_or(str::is_empty)
}
