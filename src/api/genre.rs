//! Genre API handlers

use crate::api::parse_id;
use crate::auth::CREATE_GENRE_ROUTE;
use crate::domain::{parse_payload, CreateGenreInput};
use crate::error::Result;
use crate::state::HasServices;
use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

/// List genres
pub async fn list<S: HasServices>(State(state): State<S>) -> Result<impl IntoResponse> {
    let genres = state.catalog_service().list_genres().await?;
    Ok(Json(genres))
}

/// Get genre by ID
pub async fn get<S: HasServices>(
    State(state): State<S>,
    Path(genre_id): Path<String>,
) -> Result<impl IntoResponse> {
    let genre_id = parse_id(&genre_id, "Genre")?;
    let genre = state.catalog_service().get_genre(genre_id).await?;
    Ok(Json(genre))
}

/// Create genre
///
/// POST /api/v1/genres
///
/// Signed route: the signature is checked before the body is even parsed,
/// so an unsigned request is refused regardless of its payload.
pub async fn create<S: HasServices>(
    State(state): State<S>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<impl IntoResponse> {
    state
        .authenticator()
        .verify(&CREATE_GENRE_ROUTE, &headers)?;

    let input: CreateGenreInput = parse_payload(&CreateGenreInput::SCHEMA, &body)?;
    let genre = state.catalog_service().create_genre(input).await?;
    Ok((StatusCode::CREATED, Json(genre)))
}
