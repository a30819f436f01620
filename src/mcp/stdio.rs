//! Line-delimited transport: one JSON value per line in, one per line out.
//!
//! Generic over reader and writer so the server loop can be driven from
//! in-memory buffers as well as process stdin/stdout.

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::trace;

use super::transport::JsonRpcResponse;
use crate::errors::Result;

pub struct LineTransport<R, W> {
    reader: R,
    writer: W,
}

impl<R, W> LineTransport<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Reads the next line with surrounding whitespace removed.
    ///
    /// Returns `None` at end of input.
    pub async fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let bytes_read = self.reader.read_line(&mut line).await?;
        if bytes_read == 0 {
            return Ok(None);
        }

        let trimmed = line.trim();
        trace!(len = trimmed.len(), "read line");
        Ok(Some(trimmed.to_string()))
    }

    /// Writes `response` as a single compact line and flushes.
    pub async fn write_response(&mut self, response: &JsonRpcResponse) -> Result<()> {
        let mut line = response.to_line()?;
        line.push('\n');
        trace!(len = line.len(), "writing response");

        self.writer.write_all(line.as_bytes()).await?;
        self.writer.flush().await?;
        Ok(())
    }

    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }
}
