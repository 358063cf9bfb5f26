pub mod error;
pub mod json_reader;
pub mod json_writer;
pub mod parse;

// Re-export commonly used types
pub use error::IoError;
pub use json_reader::JsonTransactionStream;
pub use json_writer::{drain_to_writer, write_record};
pub use parse::RawItemRecord;
