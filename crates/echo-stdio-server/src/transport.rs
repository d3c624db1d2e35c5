//! Line transport for JSON-RPC 2.0 over newline-delimited text.
//!
//! The reader and writer are passed in explicitly, so the same code drives
//! stdin/stdout in the binary and in-memory buffers in tests.

use tokio::io::{self, AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};

use crate::error::ServerResult;

/// Transport bound to the process's stdin and stdout
pub type StdioTransport = LineTransport<BufReader<io::Stdin>, io::Stdout>;

/// Reads one raw line at a time and writes one line at a time
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

    /// Read the next line without its `\n` or `\r\n` terminator.
    ///
    /// Returns `Ok(None)` at EOF. The bytes are not checked for UTF-8 here,
    /// so a bad line can be answered on its own instead of ending the stream.
    pub async fn read_line(&mut self) -> ServerResult<Option<Vec<u8>>> {
        let mut line = Vec::new();
        if self.reader.read_until(b'\n', &mut line).await? == 0 {
            return Ok(None);
        }
        if line.last() == Some(&b'\n') {
            line.pop();
            if line.last() == Some(&b'\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }

    /// Write one line followed by `\n` and flush
    pub async fn write_line(&mut self, line: &str) -> ServerResult<()> {
        self.writer.write_all(line.as_bytes()).await?;
        self.writer.write_all(b"\n").await?;
        self.writer.flush().await?;
        Ok(())
    }

    /// Give back the underlying reader and writer
    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }
}

impl StdioTransport {
    pub fn stdio() -> Self {
        Self::new(BufReader::new(io::stdin()), io::stdout())
    }
}
