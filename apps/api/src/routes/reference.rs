use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::cache::ReferenceKind;
use crate::errors::AppError;
use crate::state::AppState;

/// GET /api/v1/reference/:kind
pub async fn handle_get_reference(
    State(state): State<AppState>,
    Path(kind): Path<ReferenceKind>,
) -> Result<Json<Vec<String>>, AppError> {
    let values = state
        .reference_cache
        .get_or_load(kind, state.store.as_ref())
        .await?;
    Ok(Json(values.as_ref().clone()))
}

/// DELETE /api/v1/reference/:kind
/// Invalidates the cached list; the next read goes to the store.
pub async fn handle_invalidate_reference(
    State(state): State<AppState>,
    Path(kind): Path<ReferenceKind>,
) -> StatusCode {
    state.reference_cache.invalidate(kind).await;
    StatusCode::NO_CONTENT
}

/// DELETE /api/v1/reference
pub async fn handle_invalidate_all_references(State(state): State<AppState>) -> StatusCode {
    state.reference_cache.invalidate_all().await;
    StatusCode::NO_CONTENT
}
