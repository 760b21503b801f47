use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Protocol version every call is expected to carry.
pub const JSONRPC_VERSION: &str = "2.0";

/// Contents of a request file.
///
/// Missing scalar fields load as their zero value; `header` may be absent.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RequestDescriptor {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub header: Option<BTreeMap<String, Vec<String>>>,
    #[serde(default)]
    pub body: Vec<RpcCall>,
}

/// One JSON-RPC call object, serialized with the protocol's field names.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RpcCall {
    #[serde(rename = "jsonrpc", default)]
    pub version: String,
    #[serde(default)]
    pub method: String,
    #[serde(default)]
    pub params: Vec<Value>,
    /// Absent for notifications.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RpcId>,
}

impl RpcCall {
    #[cfg(test)]
    pub(crate) fn new(method: impl Into<String>, params: Vec<Value>, id: Option<RpcId>) -> Self {
        Self {
            version: JSONRPC_VERSION.to_owned(),
            method: method.into(),
            params,
            id,
        }
    }

    #[must_use]
    pub const fn is_notification(&self) -> bool {
        self.id.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RpcId {
    Number(serde_json::Number),
    Text(String),
}

impl From<u64> for RpcId {
    fn from(value: u64) -> Self {
        Self::Number(value.into())
    }
}

impl From<&str> for RpcId {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}
