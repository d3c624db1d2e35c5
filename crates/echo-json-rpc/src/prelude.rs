//! # JSON-RPC Prelude
//!
//! Re-exports of the types most callers need.
//!
//! ```rust
//! use echo_json_rpc::prelude::*;
//! ```

pub use crate::error::{JsonRpcError, JsonRpcErrorCode, JsonRpcErrorObject};
pub use crate::request::{JsonRpcRequest, RequestParams};
pub use crate::response::{JsonRpcMessage, JsonRpcResponse};
pub use crate::types::{JsonRpcVersion, RequestId};

#[cfg(feature = "async")]
pub use crate::r#async::{JsonRpcHandler, ToJsonRpcError};
