//! Endpoint extraction from response bodies.

use crate::endpoint::Endpoint;

use super::types::ResolveError;

/// Extract the endpoint from a resolution response body.
///
/// The body is free-form text containing the marker somewhere inside.
/// The endpoint is the text between the first occurrence of the marker
/// and the next separator (or the end of the body when no separator
/// follows), trimmed of whitespace.
pub fn extract_endpoint(
    body: &str,
    marker: &str,
    separator: char,
) -> Result<Endpoint, ResolveError> {
    let start = body.find(marker).ok_or_else(|| {
        ResolveError::Extraction(format!("Marker not found in {} byte response", body.len()))
    })?;

    let after = &body[start + marker.len()..];
    let candidate = match after.find(separator) {
        Some(end) => &after[..end],
        None => after,
    };

    Endpoint::new(candidate)
        .ok_or_else(|| ResolveError::Extraction("Empty endpoint after marker".to_string()))
}
