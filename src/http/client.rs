use std::time::Duration;

use reqwest::header::HeaderMap;
use reqwest::{Client, StatusCode, Url};

use crate::error::TransportError;

/// Client-side limits. `None` leaves the underlying client's default, which
/// is to wait indefinitely.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransportOptions {
    pub timeout: Option<Duration>,
    pub connect_timeout: Option<Duration>,
}

/// Status and fully-read body of the endpoint's answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

/// Thin wrapper over one reusable `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct RpcClient {
    client: Client,
}

impl RpcClient {
    /// Builds the client for this run.
    ///
    /// # Errors
    ///
    /// Returns an error when the HTTP client cannot be constructed.
    pub fn new(options: TransportOptions) -> Result<Self, TransportError> {
        let mut builder = Client::builder();
        if let Some(timeout) = options.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(connect_timeout) = options.connect_timeout {
            builder = builder.connect_timeout(connect_timeout);
        }
        let client = builder
            .build()
            .map_err(|err| TransportError::BuildClient { source: err })?;
        Ok(Self { client })
    }

    /// POSTs `body` to `url` and reads the whole response.
    ///
    /// # Errors
    ///
    /// Returns an error when the URL is invalid, the connection fails or times
    /// out, or the response body cannot be read.
    pub async fn send(
        &self,
        url: &str,
        headers: HeaderMap,
        body: Vec<u8>,
    ) -> Result<RawResponse, TransportError> {
        let target = parse_url(url)?;

        tracing::debug!("POST {} ({} bytes).", target, body.len());
        let response = self
            .client
            .post(target)
            .headers(headers)
            .body(body)
            .send()
            .await
            .map_err(TransportError::from_send)?;

        let status = response.status();
        tracing::debug!("Received HTTP {}.", status);
        let bytes = response
            .bytes()
            .await
            .map_err(|err| TransportError::IoError { source: err })?;

        Ok(RawResponse {
            status,
            body: bytes.to_vec(),
        })
    }
}

fn parse_url(url: &str) -> Result<Url, TransportError> {
    let parsed = Url::parse(url).map_err(|err| TransportError::InvalidUrl {
        url: url.to_owned(),
        source: err,
    })?;
    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        _ => Err(TransportError::UnsupportedScheme {
            url: url.to_owned(),
        }),
    }
}
