use async_trait::async_trait;
use serde_json::Value;

use crate::{
    error::{JsonRpcError, JsonRpcErrorObject},
    request::{JsonRpcRequest, RequestParams},
    response::JsonRpcMessage,
};

/// Trait for errors that can be converted to JSON-RPC error objects
pub trait ToJsonRpcError: std::error::Error + Send + Sync + 'static {
    /// Convert this error to a JSON-RPC error object
    fn to_error_object(&self) -> JsonRpcErrorObject;
}

/// Handles every request the same way, whatever its `method` says.
#[async_trait]
pub trait JsonRpcHandler: Send + Sync {
    /// The error type returned by this handler
    type Error: ToJsonRpcError;

    /// Produce the result for one request's parameters.
    /// Returns domain errors only; `handle_request` does the wire conversion.
    async fn handle(&self, params: Option<RequestParams>) -> Result<Value, Self::Error>;

    /// Run the handler for a parsed request and wrap the outcome as a message
    /// carrying the request's id.
    async fn handle_request(&self, request: JsonRpcRequest) -> JsonRpcMessage {
        let id = request.id;
        match self.handle(request.params).await {
            Ok(result) => JsonRpcMessage::success(id, result),
            Err(domain_error) => {
                let error_object = domain_error.to_error_object();
                JsonRpcMessage::error(JsonRpcError::new(id, error_object))
            }
        }
    }
}
