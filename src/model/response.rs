use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::RpcId;

/// A JSON-RPC 2.0 response object.
///
/// The pipeline prints response bodies unparsed; this shape is only used to
/// inspect a successful body for an embedded `error` member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RpcResponse {
    pub jsonrpc: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<RpcErrorObject>,
    #[serde(default)]
    pub id: Option<RpcId>,
}

impl RpcResponse {
    #[must_use]
    pub const fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RpcErrorObject {
    pub code: i64,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

/// A response body as it arrives: one object, or an array answering a batch.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RpcResponseBody {
    Batch(Vec<RpcResponse>),
    Single(RpcResponse),
}

impl RpcResponseBody {
    #[must_use]
    pub fn into_responses(self) -> Vec<RpcResponse> {
        match self {
            Self::Batch(responses) => responses,
            Self::Single(response) => vec![response],
        }
    }
}
