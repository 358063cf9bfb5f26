pub mod item;
pub mod validation;

// Re-export commonly used types
pub use item::{ItemTransaction, KeyedTransaction, OperationType};
pub use validation::{Classification, classify};
