//! # JSON-RPC 2.0 Echo Types
//!
//! Transport-agnostic JSON-RPC 2.0 types used by the line echo responder.
//! Nothing in this crate reads or writes a stream; it only describes what
//! travels over one.
//!
//! ## Features
//! - Lenient request model (any scalar id, optional `method`, optional version)
//! - Success and error responses that serialize in wire field order
//! - Standard error codes and error objects
//! - A single-handler seam (`async` feature)

pub mod error;
pub mod prelude;
pub mod request;
pub mod response;
pub mod types;

#[cfg(feature = "async")]
pub mod r#async;

// Re-export main types
pub use error::{JsonRpcError, JsonRpcErrorCode, JsonRpcErrorObject};
pub use request::{JsonRpcRequest, RequestParams};
pub use response::{JsonRpcMessage, JsonRpcResponse};
pub use types::{JsonRpcVersion, RequestId};

#[cfg(feature = "async")]
pub use r#async::{JsonRpcHandler, ToJsonRpcError};
