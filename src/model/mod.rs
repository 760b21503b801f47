//! Typed shapes of the request file and of JSON-RPC 2.0 messages.
mod request;
mod response;


pub use request::{JSONRPC_VERSION, RequestDescriptor, RpcCall, RpcId};
pub use response::{RpcErrorObject, RpcResponse, RpcResponseBody};
