//! Conditional-request support.
//!
//! ETags are derived from the exact serialized bytes the client would
//! receive, so a tag changes if and only if the content changes.

use crate::responses::AppError;
use discovery_core::DiscoveryError;
use axum::{
    body::Body,
    http::{header, HeaderMap, Response, StatusCode},
};
use serde::Serialize;
use sha2::{Digest, Sha256};

/// Computes a strong ETag for a serialized payload.
#[must_use]
pub fn etag_for(body: &[u8]) -> String {
    format!("\"{:x}\"", Sha256::digest(body))
}

/// Whether the client-supplied `If-None-Match` matches an ETag.
#[must_use]
pub fn if_none_match(headers: &HeaderMap, etag: &str) -> bool {
    headers
        .get(header::IF_NONE_MATCH)
        .and_then(|value| value.to_str().ok())
        .map_or(false, |client| client == etag)
}

/// Renders a value as a JSON response with ETag support.
///
/// The value is serialized once; the ETag is the digest of those exact
/// bytes. A matching `If-None-Match` short-circuits to an empty `304`
/// carrying the same tag.
pub fn conditional_json<T: Serialize>(
    headers: &HeaderMap,
    value: &T,
    max_age_secs: u64,
) -> Result<Response<Body>, AppError> {
    let body = serde_json::to_vec(value).map_err(DiscoveryError::from)?;
    let etag = etag_for(&body);

    if if_none_match(headers, &etag) {
        let response = Response::builder()
            .status(StatusCode::NOT_MODIFIED)
            .header(header::ETAG, &etag)
            .body(Body::empty())
            .map_err(|e| DiscoveryError::internal(e.to_string()))?;
        return Ok(response);
    }

    let response = Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::ETAG, &etag)
        .header(
            header::CACHE_CONTROL,
            format!("public, max-age={}", max_age_secs),
        )
        .body(Body::from(body))
        .map_err(|e| DiscoveryError::internal(e.to_string()))?;

    Ok(response)
}
