//! Catalog reset endpoint

use crate::api::MessageResponse;
use crate::error::Result;
use crate::state::HasServices;
use axum::{extract::State, response::IntoResponse, Json};

/// Discard all changes and reload the seed dataset
///
/// GET /api/v1/reset
pub async fn reset<S: HasServices>(State(state): State<S>) -> Result<impl IntoResponse> {
    state.catalog_service().reset().await?;
    Ok(Json(MessageResponse::new("Catalog reset to seed data")))
}
