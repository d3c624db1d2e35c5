use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

/// Client-supplied correlation token for a request.
///
/// Any JSON scalar is accepted. A missing or `null` id is represented as
/// `Option::None` by the types that carry one, and goes back out as `null`.
/// Numbers keep the exact text they arrived with.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum RequestId {
    String(String),
    Number(Number),
    Bool(bool),
}

impl From<i64> for RequestId {
    fn from(n: i64) -> Self {
        RequestId::Number(n.into())
    }
}

impl From<&str> for RequestId {
    fn from(s: &str) -> Self {
        RequestId::String(s.to_string())
    }
}

impl RequestId {
    /// Recover an id from an arbitrary JSON value.
    ///
    /// Returns `None` for `null` and for structured values, which are not
    /// valid correlation tokens.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) => Some(RequestId::String(s.clone())),
            Value::Number(n) => Some(RequestId::Number(n.clone())),
            Value::Bool(b) => Some(RequestId::Bool(*b)),
            Value::Null | Value::Array(_) | Value::Object(_) => None,
        }
    }
}

// Goes through `Value` so numbers keep their text under `arbitrary_precision`
impl<'de> Deserialize<'de> for RequestId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        RequestId::from_value(&value).ok_or_else(|| {
            serde::de::Error::custom(format!("id must be a string, number or bool, got {}", value))
        })
    }
}

/// JSON-RPC version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonRpcVersion {
    #[default]
    V2_0,
}

impl JsonRpcVersion {
    pub fn as_str(&self) -> &'static str {
        match self {
            JsonRpcVersion::V2_0 => "2.0",
        }
    }

    /// Parse a version string, accepting only `"2.0"`.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "2.0" => Some(JsonRpcVersion::V2_0),
            _ => None,
        }
    }
}

impl Serialize for JsonRpcVersion {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
