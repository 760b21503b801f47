use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FormatError {
    #[error("Expect a yaml file, got '{path}'.")]
    UnsupportedExtension { path: PathBuf },
    #[error("Failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("Field 'url' must not be empty.")]
    MissingUrl,
}

#[derive(Debug, Error)]
#[error("{source}")]
pub struct SerializationError {
    #[from]
    source: serde_json::Error,
}
