//! Catch-all for unmatched routes and unsupported methods.

use axum::http::Uri;

use crate::error::ApiError;

/// Any path (or method) the router does not serve.
pub async fn route_not_found(uri: Uri) -> ApiError {
    let path = uri
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or_else(|| uri.path());
    tracing::debug!(%path, "no route matched");
    ApiError::route_not_found(path)
}
