use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio::sync::mpsc::UnboundedReceiver;

use super::error::IoError;
use crate::domain::KeyedTransaction;

/// Write one routed record as a JSON line
///
/// Only the value is written; the key is the store identifier and is carried
/// inside the payload.
pub async fn write_record<W>(writer: &mut W, record: &KeyedTransaction) -> Result<(), IoError>
where
    W: AsyncWrite + Unpin + Send,
{
    let line = serde_json::to_string(&record.value)?;
    writer.write_all(line.as_bytes()).await?;
    writer.write_all(b"\n").await?;
    Ok(())
}

/// Drain a routed channel into a writer until the channel closes
///
/// Returns the writer, flushed, so the caller can keep using or close it.
pub async fn drain_to_writer<W>(
    mut receiver: UnboundedReceiver<KeyedTransaction>,
    mut writer: W,
) -> Result<W, IoError>
where
    W: AsyncWrite + Unpin + Send,
{
    while let Some(record) = receiver.recv().await {
        write_record(&mut writer, &record).await?;
    }
    writer.flush().await?;
    Ok(writer)
}
