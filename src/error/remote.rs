use reqwest::StatusCode;
use thiserror::Error;

/// A non-200 answer from the endpoint. The body is the message, unparsed.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct RemoteError {
    pub status: StatusCode,
    pub message: String,
}

impl RemoteError {
    #[must_use]
    pub fn new(status: StatusCode, body: &[u8]) -> Self {
        Self {
            status,
            message: String::from_utf8_lossy(body).into_owned(),
        }
    }
}
