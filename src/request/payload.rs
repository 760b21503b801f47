use crate::error::SerializationError;
use crate::model::RpcCall;

/// Serializes the calls as one JSON array. A single call is still sent as a
/// one-element array.
///
/// # Errors
///
/// Returns an error when a call cannot be represented as JSON.
pub fn build_payload(body: &[RpcCall]) -> Result<Vec<u8>, SerializationError> {
    let payload = serde_json::to_vec(body)?;
    tracing::debug!("Built payload of {} bytes.", payload.len());
    Ok(payload)
}
