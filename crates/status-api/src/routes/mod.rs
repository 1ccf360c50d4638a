pub mod health;
pub mod keycloak;
pub mod metrics;

use axum::extract::OriginalUri;

use crate::error::ApiError;

/// Router fallback for unmatched paths.
pub async fn not_found(OriginalUri(uri): OriginalUri) -> ApiError {
    tracing::debug!(%uri, "no matching route");
    ApiError::NotFound(uri.path().to_string())
}
