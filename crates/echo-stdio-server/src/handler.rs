//! The echo operation.

use async_trait::async_trait;
use echo_json_rpc::request::INPUT_PARAM;
use echo_json_rpc::{JsonRpcErrorObject, JsonRpcHandler, RequestParams, ToJsonRpcError};
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EchoError {
    #[error("params.input is required")]
    MissingInput,
}

impl ToJsonRpcError for EchoError {
    fn to_error_object(&self) -> JsonRpcErrorObject {
        match self {
            EchoError::MissingInput => JsonRpcErrorObject::invalid_params(&self.to_string()),
        }
    }
}

/// Returns `params.input` unmodified.
///
/// A missing input echoes as `null` unless `require_input` is set.
#[derive(Debug, Clone, Copy, Default)]
pub struct EchoHandler {
    require_input: bool,
}

impl EchoHandler {
    pub fn new(require_input: bool) -> Self {
        Self { require_input }
    }
}

#[async_trait]
impl JsonRpcHandler for EchoHandler {
    type Error = EchoError;

    async fn handle(&self, params: Option<RequestParams>) -> Result<Value, Self::Error> {
        match params.and_then(|p| p.take(INPUT_PARAM)) {
            Some(input) => Ok(input),
            None if self.require_input => Err(EchoError::MissingInput),
            None => Ok(Value::Null),
        }
    }
}
