use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("Init http request: invalid URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("Init http request: unsupported URL scheme in '{url}'. Use http or https.")]
    UnsupportedScheme { url: String },
    #[error("Init http request: invalid header name '{name}'.")]
    InvalidHeaderName { name: String },
    #[error("Init http request: invalid value for header '{name}'.")]
    InvalidHeaderValue { name: String },
    #[error("Init http request: failed to build HTTP client: {source}")]
    BuildClient {
        #[source]
        source: reqwest::Error,
    },
    #[error("Http: {source}")]
    ConnectionFailed {
        #[source]
        source: reqwest::Error,
    },
    #[error("Http: request timed out: {source}")]
    TimedOut {
        #[source]
        source: reqwest::Error,
    },
    #[error("Read http body: {source}")]
    IoError {
        #[source]
        source: reqwest::Error,
    },
}

impl TransportError {
    /// Classifies an error returned while sending the request.
    pub(crate) fn from_send(source: reqwest::Error) -> Self {
        if source.is_timeout() {
            Self::TimedOut { source }
        } else {
            Self::ConnectionFailed { source }
        }
    }
}
