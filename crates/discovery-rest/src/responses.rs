//! API response types and error translation.

use axum::{
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
    Json,
};
use discovery_core::{DiscoveryError, ErrorResponse};

/// Application error type for Axum.
///
/// Wraps [`DiscoveryError`] so every handler error renders as the
/// standard `{error, message, status}` JSON body with the matching
/// HTTP status code.
#[derive(Debug)]
pub struct AppError(pub DiscoveryError);

impl From<DiscoveryError> for AppError {
    fn from(err: DiscoveryError) -> Self {
        Self(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let body = Json(ErrorResponse::from_error(&self.0));
        (status, body).into_response()
    }
}

/// Fallback handler for unmatched routes.
pub async fn not_found_fallback(uri: Uri) -> AppError {
    AppError(DiscoveryError::not_found("route", uri.path()))
}
