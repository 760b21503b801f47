//! Turns the endpoint's answer into process output.
use std::io::Write;

use reqwest::StatusCode;

use crate::error::{AppResult, RemoteError};
use crate::http::RawResponse;
use crate::model::{RpcErrorObject, RpcResponse, RpcResponseBody};

/// Decides success or failure from the HTTP status alone.
///
/// On 200 the body is returned untouched; anything else becomes a
/// [`RemoteError`] whose message is the body as text.
///
/// # Errors
///
/// Returns an error for every status other than 200.
pub fn interpret(status: StatusCode, body: &[u8]) -> Result<&[u8], RemoteError> {
    if status == StatusCode::OK {
        Ok(body)
    } else {
        tracing::debug!("Endpoint answered HTTP {}.", status);
        Err(RemoteError::new(status, body))
    }
}

/// Writes a successful body to `out`, followed by a newline.
///
/// # Errors
///
/// Returns an error when the status is not 200 or `out` cannot be written.
pub fn report<W: Write>(response: &RawResponse, out: &mut W) -> AppResult<()> {
    let body = interpret(response.status, &response.body)?;
    note_embedded_error(body);
    out.write_all(body)?;
    out.write_all(b"\n")?;
    out.flush()?;
    Ok(())
}

// JSON-RPC errors arrive inside 200 responses; flag them without changing output.
fn note_embedded_error(body: &[u8]) {
    for error in embedded_errors(body) {
        tracing::warn!(
            "Response carries JSON-RPC error {}: {}",
            error.code,
            error.message
        );
    }
}

/// Error objects carried by a single response or by any member of a batch.
/// Bodies that are not JSON-RPC responses yield nothing.
fn embedded_errors(body: &[u8]) -> Vec<RpcErrorObject> {
    serde_json::from_slice::<RpcResponseBody>(body)
        .map(RpcResponseBody::into_responses)
        .unwrap_or_default()
        .into_iter()
        .filter(RpcResponse::is_error)
        .filter_map(|response| response.error)
        .collect()
}
