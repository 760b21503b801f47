use std::collections::BTreeMap;

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};

use crate::error::TransportError;

const JSON_CONTENT_TYPE: &str = "application/json";

/// Builds the request headers from the request file's `header` section.
///
/// Every value of a name is appended in order, so repeated headers survive.
/// `Content-Type: application/json` is added unless the file sets its own.
///
/// # Errors
///
/// Returns an error when a header name or value is not valid HTTP.
pub fn build_header_map(
    headers: Option<&BTreeMap<String, Vec<String>>>,
) -> Result<HeaderMap, TransportError> {
    let mut map = HeaderMap::new();

    for (name, values) in headers.into_iter().flatten() {
        let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|_err| {
            TransportError::InvalidHeaderName {
                name: name.clone(),
            }
        })?;
        for value in values {
            let header_value = HeaderValue::from_str(value).map_err(|_err| {
                TransportError::InvalidHeaderValue {
                    name: name.clone(),
                }
            })?;
            map.append(header_name.clone(), header_value);
        }
    }

    if !map.contains_key(CONTENT_TYPE) {
        map.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));
    }

    Ok(map)
}
