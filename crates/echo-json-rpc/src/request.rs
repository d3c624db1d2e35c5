use serde::de::Error as _;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::types::{JsonRpcVersion, RequestId};

/// Name of the parameter whose value is echoed back as the result
pub const INPUT_PARAM: &str = "input";

/// Parameters for a JSON-RPC request
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RequestParams {
    /// Positional parameters as an array
    Array(Vec<Value>),
    /// Named parameters as an object
    Object(Map<String, Value>),
}

impl RequestParams {
    /// Get a parameter by name (object params only)
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            RequestParams::Object(map) => map.get(key),
            RequestParams::Array(_) => None,
        }
    }

    /// Take a named parameter out by value (object params only)
    pub fn take(self, key: &str) -> Option<Value> {
        match self {
            RequestParams::Object(mut map) => map.remove(key),
            RequestParams::Array(_) => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            RequestParams::Object(map) => map.is_empty(),
            RequestParams::Array(vec) => vec.is_empty(),
        }
    }

    /// `null` means no params; anything other than an array or object is rejected
    pub fn from_value(value: Value) -> Result<Option<Self>, serde_json::Error> {
        match value {
            Value::Null => Ok(None),
            Value::Array(vec) => Ok(Some(RequestParams::Array(vec))),
            Value::Object(map) => Ok(Some(RequestParams::Object(map))),
            other => Err(serde_json::Error::custom(format!(
                "params must be an array or object, got {}",
                other
            ))),
        }
    }
}

impl From<Map<String, Value>> for RequestParams {
    fn from(map: Map<String, Value>) -> Self {
        RequestParams::Object(map)
    }
}

/// A JSON-RPC request as read off the wire.
///
/// Only `id` and `params` have a required shape. `jsonrpc` and `method` are
/// kept as whatever JSON they held, so a request is never rejected for them;
/// version checking is left to the caller.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JsonRpcRequest {
    #[serde(rename = "jsonrpc", skip_serializing_if = "Option::is_none")]
    pub version: Option<Value>,
    pub id: Option<RequestId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<RequestParams>,
}

impl JsonRpcRequest {
    pub fn new(id: Option<RequestId>, params: Option<RequestParams>) -> Self {
        Self {
            version: Some(Value::from(JsonRpcVersion::V2_0.as_str())),
            id,
            method: None,
            params,
        }
    }

    /// Create a request carrying a single `input` parameter
    pub fn with_input(id: Option<RequestId>, input: Value) -> Self {
        let mut params = Map::new();
        params.insert(INPUT_PARAM.to_string(), input);
        Self::new(id, Some(RequestParams::Object(params)))
    }

    pub fn with_method(mut self, method: impl Into<String>) -> Self {
        self.method = Some(Value::String(method.into()));
        self
    }

    /// Interpret an already-parsed JSON value as a request.
    ///
    /// Fails when the value is not an object, when `id` is structured, or
    /// when `params` is a scalar. Unknown fields are ignored.
    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        let Value::Object(mut map) = value else {
            return Err(serde_json::Error::custom("request must be a JSON object"));
        };

        let id = match map.remove("id") {
            None | Some(Value::Null) => None,
            Some(value) => Some(RequestId::from_value(&value).ok_or_else(|| {
                serde_json::Error::custom(format!(
                    "id must be a string, number or bool, got {}",
                    value
                ))
            })?),
        };
        let params = match map.remove("params") {
            Some(value) => RequestParams::from_value(value)?,
            None => None,
        };

        Ok(Self {
            version: map.remove("jsonrpc").filter(|v| !v.is_null()),
            id,
            method: map.remove("method").filter(|v| !v.is_null()),
            params,
        })
    }

    /// The declared protocol version, if it is one this crate understands
    pub fn json_rpc_version(&self) -> Option<JsonRpcVersion> {
        self.version
            .as_ref()
            .and_then(Value::as_str)
            .and_then(JsonRpcVersion::parse)
    }

    /// Get a parameter by name (if params are an object)
    pub fn get_param(&self, name: &str) -> Option<&Value> {
        self.params.as_ref()?.get(name)
    }

    /// The `params.input` value, if present
    pub fn input(&self) -> Option<&Value> {
        self.get_param(INPUT_PARAM)
    }
}

// Goes through `Value` so numbers keep their text under `arbitrary_precision`
impl<'de> Deserialize<'de> for JsonRpcRequest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        JsonRpcRequest::from_value(value).map_err(D::Error::custom)
    }
}
