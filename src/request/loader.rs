use std::path::Path;

use crate::error::FormatError;
use crate::model::{JSONRPC_VERSION, RequestDescriptor};

const REQUEST_FILE_SUFFIXES: [&str; 2] = [".yml", ".yaml"];

/// Returns true when `path` names a file the loader accepts.
#[must_use]
pub fn is_request_file(path: &Path) -> bool {
    path.to_str().is_some_and(|name| {
        REQUEST_FILE_SUFFIXES
            .iter()
            .any(|suffix| name.ends_with(suffix))
    })
}

/// Loads and validates a request descriptor from a YAML file.
///
/// # Errors
///
/// Returns an error when the file name has no YAML suffix, the file cannot be
/// read or parsed, or the descriptor has an empty `url`.
pub fn load_request_file(path: &Path) -> Result<RequestDescriptor, FormatError> {
    if !is_request_file(path) {
        return Err(FormatError::UnsupportedExtension {
            path: path.to_path_buf(),
        });
    }

    let content = std::fs::read_to_string(path).map_err(|err| FormatError::Io {
        path: path.to_path_buf(),
        source: err,
    })?;

    let descriptor: RequestDescriptor =
        serde_yaml::from_str(&content).map_err(|err| FormatError::Parse {
            path: path.to_path_buf(),
            source: err,
        })?;

    if descriptor.url.trim().is_empty() {
        return Err(FormatError::MissingUrl);
    }

    if descriptor.body.is_empty() {
        tracing::warn!("Request file '{}' has no calls in 'body'.", path.display());
    }
    for (index, call) in descriptor.body.iter().enumerate() {
        if call.version != JSONRPC_VERSION {
            tracing::warn!(
                "Call {} ('{}') declares jsonrpc '{}', expected '{}'.",
                index,
                call.method,
                call.version,
                JSONRPC_VERSION
            );
        }
    }

    let notifications = descriptor
        .body
        .iter()
        .filter(|call| call.is_notification())
        .count();
    tracing::debug!(
        "Loaded {} call(s), {} notification(s), for {} from '{}'.",
        descriptor.body.len(),
        notifications,
        descriptor.url,
        path.display()
    );
    Ok(descriptor)
}
