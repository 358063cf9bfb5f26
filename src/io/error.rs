use std::io;

use thiserror::Error;
use tokio_util::codec::LinesCodecError;

/// IO-level errors for JSON Lines decoding and stream plumbing
///
/// These occur strictly before a record reaches the router; routing itself
/// never produces them.
#[derive(Error, Debug)]
pub enum IoError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("line decoding error: {0}")]
    Lines(#[from] LinesCodecError),

    #[error("JSON decoding error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid operation type: {0}")]
    InvalidOperationType(String),
}
