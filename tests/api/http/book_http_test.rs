//! Book API HTTP Handler Tests

use super::{
    build_test_router, error_message, get_json, patch_json, post_json, send_raw, TestAppState,
};
use crate::api::seeded_pride_and_prejudice;
use axum::http::{Method, StatusCode};
use bookshelf_core::domain::Book;
use bookshelf_core::repository::Catalog;
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{json, Value};

// ============================================================================
// Read Tests
// ============================================================================

#[tokio::test]
async fn test_list_books_returns_seed() {
    let app = build_test_router(TestAppState::new());

    let (status, body): (StatusCode, Option<Vec<Book>>) = get_json(&app, "/api/v1/books").await;

    assert_eq!(status, StatusCode::OK);
    let books = body.unwrap();
    assert_eq!(books.len(), 3);
    assert_eq!(books[0], seeded_pride_and_prejudice());
}

#[tokio::test]
async fn test_get_book_has_exactly_four_keys() {
    let app = build_test_router(TestAppState::new());

    let (status, body): (StatusCode, Option<Value>) =
        get_json(&app, "/api/v1/genres/1/books/1").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body.unwrap(),
        json!({
            "id": 1,
            "title": "Pride and Prejudice",
            "author": "Jane Austin",
            "genreId": 1
        })
    );
}

#[tokio::test]
async fn test_get_missing_book_returns_404() {
    let app = build_test_router(TestAppState::new());

    let (status, body): (StatusCode, Option<Value>) =
        get_json(&app, "/api/v1/genres/1/books/10").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    error_message(&body);
}

#[tokio::test]
async fn test_get_book_under_wrong_genre_returns_404() {
    let app = build_test_router(TestAppState::new());

    let (status, body): (StatusCode, Option<Value>) =
        get_json(&app, "/api/v1/genres/2/books/1").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    error_message(&body);
}

#[rstest]
#[case("/api/v1/genres/abc/books/1")]
#[case("/api/v1/genres/1/books/xyz")]
#[case("/api/v1/genres/0/books/1")]
#[tokio::test]
async fn test_get_book_with_non_numeric_id_returns_404(#[case] path: &str) {
    let app = build_test_router(TestAppState::new());

    let (status, body): (StatusCode, Option<Value>) = get_json(&app, path).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    error_message(&body);
}

#[tokio::test]
async fn test_list_books_in_genre() {
    let app = build_test_router(TestAppState::new());

    let (status, body): (StatusCode, Option<Vec<Book>>) =
        get_json(&app, "/api/v1/genres/1/books").await;

    assert_eq!(status, StatusCode::OK);
    let books = body.unwrap();
    assert_eq!(books.len(), 2);
    assert!(books.iter().all(|b| b.genre_id == 1));
}

#[tokio::test]
async fn test_list_books_in_missing_genre_returns_404() {
    let app = build_test_router(TestAppState::new());

    let (status, body): (StatusCode, Option<Value>) =
        get_json(&app, "/api/v1/genres/9/books").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    error_message(&body);
}

// ============================================================================
// Update Tests
// ============================================================================

#[tokio::test]
async fn test_patch_book_moves_it_to_new_genre() {
    let app = build_test_router(TestAppState::new());

    let (status, body): (StatusCode, Option<Value>) = patch_json(
        &app,
        "/api/v1/genres/1/books/1",
        &json!({
            "title": "Scientist Eleanor Follows",
            "author": "Gabriel Smith",
            "genreId": 2
        }),
    )
    .await;

    let expected = json!({
        "id": 1,
        "title": "Scientist Eleanor Follows",
        "author": "Gabriel Smith",
        "genreId": 2
    });
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.unwrap(), expected);

    let (status, body): (StatusCode, Option<Value>) =
        get_json(&app, "/api/v1/genres/2/books/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.unwrap(), expected);

    // No longer reachable under its old genre
    let (status, _): (StatusCode, Option<Value>) =
        get_json(&app, "/api/v1/genres/1/books/1").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_patch_book_partial_keeps_other_fields() {
    let app = build_test_router(TestAppState::new());

    let (status, body): (StatusCode, Option<Book>) = patch_json(
        &app,
        "/api/v1/genres/1/books/2",
        &json!({"title": "Sjálfstætt fólk"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let book = body.unwrap();
    assert_eq!(book.title, "Sjálfstætt fólk");
    assert_eq!(book.author, "Halldór Laxness");
    assert_eq!(book.genre_id, 1);
}

#[tokio::test]
async fn test_patch_with_only_unknown_keys_returns_400_and_leaves_store() {
    let state = TestAppState::new();
    let app = build_test_router(state.clone());

    let (status, body): (StatusCode, Option<Value>) = patch_json(
        &app,
        "/api/v1/genres/1/books/1",
        &json!({"perfectly": "without", "create": "mainly"}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    error_message(&body);
    assert_eq!(state.catalog_repo.snapshot().await, Catalog::seeded());
}

#[rstest]
#[case(json!({"title": "Emma", "isbn": "123"}))]
#[case(json!({}))]
#[case(json!({"title": 42}))]
#[case(json!({"genreId": "two"}))]
#[case(json!({"genreId": 0}))]
#[case(json!({"author": null}))]
#[case(json!({"title": ""}))]
#[case(json!({"author": ""}))]
#[case(json!(["title"]))]
#[tokio::test]
async fn test_patch_with_invalid_payload_returns_400(#[case] payload: Value) {
    let state = TestAppState::new();
    let app = build_test_router(state.clone());

    let (status, body): (StatusCode, Option<Value>) =
        patch_json(&app, "/api/v1/genres/1/books/1", &payload).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    error_message(&body);
    assert_eq!(state.catalog_repo.snapshot().await, Catalog::seeded());
}

#[tokio::test]
async fn test_patch_with_malformed_json_returns_400() {
    let app = build_test_router(TestAppState::new());

    let (status, bytes) = send_raw(
        &app,
        Method::PATCH,
        "/api/v1/genres/1/books/1",
        Some("{\"title\": "),
        &[],
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let body: Option<Value> = serde_json::from_slice(&bytes).ok();
    error_message(&body);
}

#[tokio::test]
async fn test_patch_book_under_wrong_genre_returns_404() {
    let state = TestAppState::new();
    let app = build_test_router(state.clone());

    let (status, body): (StatusCode, Option<Value>) = patch_json(
        &app,
        "/api/v1/genres/2/books/1",
        &json!({"title": "Emma"}),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    error_message(&body);
    assert_eq!(state.catalog_repo.snapshot().await, Catalog::seeded());
}

#[tokio::test]
async fn test_patch_to_missing_genre_returns_404() {
    let state = TestAppState::new();
    let app = build_test_router(state.clone());

    let (status, body): (StatusCode, Option<Value>) = patch_json(
        &app,
        "/api/v1/genres/1/books/1",
        &json!({"genreId": 99}),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    error_message(&body);
    assert_eq!(state.catalog_repo.snapshot().await, Catalog::seeded());
}

// ============================================================================
// Create Tests
// ============================================================================

#[tokio::test]
async fn test_create_book_returns_201() {
    let app = build_test_router(TestAppState::new());

    let (status, body): (StatusCode, Option<Value>) = post_json(
        &app,
        "/api/v1/genres/2/books",
        &json!({"title": "Egils saga", "author": "Snorri Sturluson"}),
        &[],
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(
        body.unwrap(),
        json!({
            "id": 4,
            "title": "Egils saga",
            "author": "Snorri Sturluson",
            "genreId": 2
        })
    );

    let (_, books): (StatusCode, Option<Vec<Book>>) = get_json(&app, "/api/v1/books").await;
    assert_eq!(books.unwrap().len(), 4);
}

#[rstest]
#[case(json!({"title": "Egils saga"}))]
#[case(json!({"author": "Snorri Sturluson"}))]
#[case(json!({"title": "Egils saga", "author": "Snorri", "genreId": 1}))]
#[case(json!({"title": "", "author": "Snorri Sturluson"}))]
#[case(json!({"title": "Egils saga", "author": ""}))]
#[tokio::test]
async fn test_create_book_with_invalid_payload_returns_400(#[case] payload: Value) {
    let state = TestAppState::new();
    let app = build_test_router(state.clone());

    let (status, body): (StatusCode, Option<Value>) =
        post_json(&app, "/api/v1/genres/2/books", &payload, &[]).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    error_message(&body);
    assert_eq!(state.catalog_repo.snapshot().await.books().len(), 3);
}

#[tokio::test]
async fn test_create_book_in_missing_genre_returns_404() {
    let state = TestAppState::new();
    let app = build_test_router(state.clone());

    let (status, body): (StatusCode, Option<Value>) = post_json(
        &app,
        "/api/v1/genres/7/books",
        &json!({"title": "Egils saga", "author": "Snorri Sturluson"}),
        &[],
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    error_message(&body);
    assert_eq!(state.catalog_repo.snapshot().await.books().len(), 3);
}
