use std::io;

use thiserror::Error;
use tokio::task::JoinError;

use crate::io::IoError;
use crate::routing::RoutingError;

/// Top-level application errors unifying all layer errors
#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("decode error: {0}")]
    Decode(#[from] IoError),

    #[error("routing error: {0}")]
    Routing(#[from] RoutingError),

    #[error("output task failed: {0}")]
    Join(#[from] JoinError),

    #[error("invalid arguments: {0}")]
    InvalidArguments(String),
}
