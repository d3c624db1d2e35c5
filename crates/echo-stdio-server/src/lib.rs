//! # Line Echo Responder
//!
//! Reads newline-delimited JSON-RPC 2.0 requests and answers each one with
//! a response whose `result` is the request's `params.input`, unmodified,
//! under the same `id`.
//!
//! ```rust,no_run
//! use echo_stdio_server::{EchoConfig, EchoResponder, StdioTransport};
//!
//! # async fn run() -> echo_stdio_server::ServerResult<()> {
//! let responder = EchoResponder::new(EchoConfig::new());
//! let mut transport = StdioTransport::stdio();
//! responder.serve(&mut transport).await?;
//! # Ok(())
//! # }
//! ```
//!
//! Lines are handled strictly one after another. A malformed line is
//! answered with a JSON-RPC error object (or dropped, see
//! [`MalformedPolicy`]) and never stops the stream.

pub mod config;
pub mod error;
pub mod handler;
pub mod responder;
pub mod transport;

pub use config::{EchoConfig, MalformedPolicy};
pub use error::{ServerError, ServerResult};
pub use handler::{EchoError, EchoHandler};
pub use responder::{EchoResponder, ServeStats};
pub use transport::{LineTransport, StdioTransport};
