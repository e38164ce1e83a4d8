//! Book API handlers

use crate::api::parse_id;
use crate::domain::{parse_payload, CreateBookInput, UpdateBookInput};
use crate::error::Result;
use crate::state::HasServices;
use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

/// List every book in the catalog
///
/// GET /api/v1/books
pub async fn list<S: HasServices>(State(state): State<S>) -> Result<impl IntoResponse> {
    let books = state.catalog_service().list_books().await?;
    Ok(Json(books))
}

/// List the books filed under one genre
///
/// GET /api/v1/genres/{genreId}/books
pub async fn list_in_genre<S: HasServices>(
    State(state): State<S>,
    Path(genre_id): Path<String>,
) -> Result<impl IntoResponse> {
    let genre_id = parse_id(&genre_id, "Genre")?;
    let books = state.catalog_service().list_books_in_genre(genre_id).await?;
    Ok(Json(books))
}

/// Get a book by genre and book id
///
/// GET /api/v1/genres/{genreId}/books/{bookId}
pub async fn get<S: HasServices>(
    State(state): State<S>,
    Path((genre_id, book_id)): Path<(String, String)>,
) -> Result<impl IntoResponse> {
    let genre_id = parse_id(&genre_id, "Genre")?;
    let book_id = parse_id(&book_id, "Book")?;
    let book = state.catalog_service().get_book(genre_id, book_id).await?;
    Ok(Json(book))
}

/// Partially update a book
///
/// PATCH /api/v1/genres/{genreId}/books/{bookId}
///
/// The body may carry any non-empty subset of `title`, `author` and
/// `genreId`; the book must currently belong to the genre in the path.
pub async fn update<S: HasServices>(
    State(state): State<S>,
    Path((genre_id, book_id)): Path<(String, String)>,
    body: Bytes,
) -> Result<impl IntoResponse> {
    let genre_id = parse_id(&genre_id, "Genre")?;
    let book_id = parse_id(&book_id, "Book")?;
    let input: UpdateBookInput = parse_payload(&UpdateBookInput::SCHEMA, &body)?;

    let book = state
        .catalog_service()
        .update_book(genre_id, book_id, input)
        .await?;
    Ok(Json(book))
}

/// Create a book under a genre
///
/// POST /api/v1/genres/{genreId}/books
pub async fn create<S: HasServices>(
    State(state): State<S>,
    Path(genre_id): Path<String>,
    body: Bytes,
) -> Result<impl IntoResponse> {
    let genre_id = parse_id(&genre_id, "Genre")?;
    let input: CreateBookInput = parse_payload(&CreateBookInput::SCHEMA, &body)?;

    let book = state.catalog_service().create_book(genre_id, input).await?;
    Ok((StatusCode::CREATED, Json(book)))
}
