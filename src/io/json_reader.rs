use std::path::Path;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures::{Stream, StreamExt};
use tokio::fs::File;
use tokio::io::AsyncRead;
use tokio_util::codec::{FramedRead, LinesCodec};

use super::error::IoError;
use super::parse::RawItemRecord;
use crate::domain::KeyedTransaction;

/// Async stream of keyed transactions from JSON Lines input
///
/// One JSON object per line; blank lines are skipped. Malformed lines
/// surface as `Err` items so the enclosing policy can decide whether to
/// skip or abort.
pub struct JsonTransactionStream {
    inner: Pin<Box<dyn Stream<Item = Result<KeyedTransaction, IoError>> + Send>>,
}

impl JsonTransactionStream {
    /// Create a new transaction stream from an async reader
    pub fn new<R>(reader: R) -> Self
    where
        R: AsyncRead + Unpin + Send + 'static,
    {
        let lines = FramedRead::new(reader, LinesCodec::new());

        let stream = lines
            .filter(|result| {
                let keep = !matches!(result, Ok(line) if line.trim().is_empty());
                futures::future::ready(keep)
            })
            .map(|result| {
                let line = result?;
                let raw: RawItemRecord = serde_json::from_str(&line)?;
                raw.parse()
            });

        Self {
            inner: Box::pin(stream),
        }
    }

    /// Create a new transaction stream from a file path
    pub async fn from_file(path: impl AsRef<Path>) -> Result<Self, IoError> {
        let file = File::open(path.as_ref()).await?;
        Ok(Self::new(file))
    }
}

impl Stream for JsonTransactionStream {
    type Item = Result<KeyedTransaction, IoError>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.inner.as_mut().poll_next(cx)
    }
}
