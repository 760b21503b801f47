use thiserror::Error;

use super::{ConfigError, FormatError, RemoteError, SerializationError, TransportError};

/// Top-level error of a run. Every variant carries the label of the stage
/// that produced it, except [`RemoteError`] whose body is printed verbatim.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
    #[error("CLI error: {source}")]
    Clap {
        #[from]
        source: clap::Error,
    },
    #[error("Config: {0}")]
    Config(#[from] ConfigError),
    #[error("Request file: {0}")]
    Format(#[from] FormatError),
    #[error("Marshal request: {0}")]
    Serialization(#[from] SerializationError),
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error(transparent)]
    Remote(#[from] RemoteError),
}

pub type AppResult<T> = Result<T, AppError>;
