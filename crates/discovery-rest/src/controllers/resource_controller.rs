//! Resource catalog controller.

use crate::{
    etag::conditional_json,
    extractors::ListQuery,
    responses::AppError,
    state::AppState,
};
use axum::{
    body::Body,
    extract::{Path, Query, State},
    http::{HeaderMap, Response},
    routing::get,
    Router,
};
use discovery_core::DiscoveryError;
use tracing::debug;

/// `Cache-Control` max-age for listing responses, in seconds.
const LIST_MAX_AGE: u64 = 60;
/// `Cache-Control` max-age for single-resource responses, in seconds.
const RESOURCE_MAX_AGE: u64 = 300;

/// Creates the resource router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_resources))
        .route("/:id", get(get_resource))
}

/// List resources with filtering, sorting, and pagination.
///
/// Query params: `page`, `limit` (max 50), `type` (theme, plugin),
/// `platform` (all, windows, macos, linux), `sort_by` (name,
/// download_count, updated_at), `order` (asc, desc).
async fn list_resources(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(raw): Query<ListQuery>,
) -> Result<Response<Body>, AppError> {
    debug!("List resources request: {:?}", raw);

    let query = raw.validate()?;
    let list = state.repository.find_all(&query);

    conditional_json(&headers, &list, LIST_MAX_AGE)
}

/// Get a single resource by ID.
async fn get_resource(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<Response<Body>, AppError> {
    debug!("Get resource request: {}", id);

    let resource = state
        .repository
        .find_by_id(&id)
        .ok_or_else(|| DiscoveryError::not_found("Resource", &id))?;

    conditional_json(&headers, &resource, RESOURCE_MAX_AGE)
}
