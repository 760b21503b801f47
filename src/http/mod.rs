//! HTTP transport for a single JSON-RPC round trip.
mod client;
mod headers;


pub use client::{RawResponse, RpcClient, TransportOptions};
pub use headers::build_header_map;
