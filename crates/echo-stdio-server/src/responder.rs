//! Per-line request handling and the serve loop.

use echo_json_rpc::{JsonRpcError, JsonRpcHandler, JsonRpcMessage, JsonRpcRequest, RequestId};
use serde_json::Value;
use tokio::io::{AsyncBufRead, AsyncWrite};
use tracing::{debug, info, warn};

use crate::config::{EchoConfig, MalformedPolicy};
use crate::error::ServerResult;
use crate::handler::EchoHandler;
use crate::transport::LineTransport;

/// Counters reported when the input stream ends
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ServeStats {
    pub lines_read: u64,
    pub lines_skipped: u64,
    pub results_written: u64,
    pub errors_written: u64,
}

/// Turns each input line into at most one response line.
pub struct EchoResponder<H = EchoHandler> {
    config: EchoConfig,
    handler: H,
}

impl EchoResponder<EchoHandler> {
    pub fn new(config: EchoConfig) -> Self {
        Self::with_handler(config, EchoHandler::new(config.strict))
    }
}

impl<H: JsonRpcHandler> EchoResponder<H> {
    pub fn with_handler(config: EchoConfig, handler: H) -> Self {
        Self { config, handler }
    }

    /// Process one raw line.
    ///
    /// Returns `None` only for malformed lines under
    /// [`MalformedPolicy::Skip`]. A blank line is malformed: it is not JSON.
    /// Never fails; every problem with the line itself becomes an error
    /// response or a skip.
    ///
    /// Nesting deeper than serde_json's recursion limit (128) is reported
    /// as a parse error.
    pub async fn respond(&self, line: &[u8]) -> Option<JsonRpcMessage> {
        let text = match std::str::from_utf8(line) {
            Ok(text) => text,
            Err(e) => return self.malformed(JsonRpcError::parse_error(Some(e.to_string()))),
        };

        let value: Value = match serde_json::from_str(text) {
            Ok(value) => value,
            Err(e) => return self.malformed(JsonRpcError::parse_error(Some(e.to_string()))),
        };

        let id = value.get("id").and_then(RequestId::from_value);
        let request = match JsonRpcRequest::from_value(value) {
            Ok(request) => request,
            Err(e) => return self.malformed(JsonRpcError::invalid_request(id, Some(e.to_string()))),
        };

        if self.config.strict && request.json_rpc_version().is_none() {
            let detail = match &request.version {
                Some(Value::String(version)) => format!("unsupported jsonrpc version: {}", version),
                Some(other) => format!("unsupported jsonrpc version: {}", other),
                None => "missing jsonrpc version".to_string(),
            };
            return self.malformed(JsonRpcError::invalid_request(request.id, Some(detail)));
        }

        debug!(id = ?request.id, method = ?request.method, "Echoing request");
        Some(self.handler.handle_request(request).await)
    }

    fn malformed(&self, error: JsonRpcError) -> Option<JsonRpcMessage> {
        let detail = error.error.data.as_ref().and_then(Value::as_str).unwrap_or("");
        match self.config.on_malformed {
            MalformedPolicy::Respond => {
                warn!(code = error.error.code, detail, "Malformed request line");
                Some(JsonRpcMessage::error(error))
            }
            MalformedPolicy::Skip => {
                warn!(code = error.error.code, detail, "Dropping malformed request line");
                None
            }
        }
    }

    /// Answer lines from `transport` in order until its input ends.
    ///
    /// Only stream failures end the loop early.
    pub async fn serve<R, W>(&self, transport: &mut LineTransport<R, W>) -> ServerResult<ServeStats>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut stats = ServeStats::default();

        while let Some(line) = transport.read_line().await? {
            stats.lines_read += 1;

            let Some(message) = self.respond(&line).await else {
                stats.lines_skipped += 1;
                continue;
            };

            let out = message.to_line()?;
            transport.write_line(&out).await?;

            if message.is_error() {
                stats.errors_written += 1;
            } else {
                stats.results_written += 1;
            }
        }

        info!(
            lines_read = stats.lines_read,
            lines_skipped = stats.lines_skipped,
            results_written = stats.results_written,
            errors_written = stats.errors_written,
            "Input closed"
        );
        Ok(stats)
    }
}
