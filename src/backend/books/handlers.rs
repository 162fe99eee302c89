/**
 * Book Handlers
 *
 * HTTP handlers for the book catalogue.
 *
 * # Endpoints
 *
 * - `GET /api/books` - list every book (public)
 * - `GET /api/books/{id}` - fetch one book (public)
 * - `POST /api/books` - create (bearer token)
 * - `PUT /api/books/{id}` - partial update (bearer token)
 * - `DELETE /api/books/{id}` - delete, returning the removed book (bearer token)
 *
 * Ids that are not UUIDs are treated like unknown ids: 404 "Book not found".
 */
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::Json,
};
use uuid::Uuid;

use crate::backend::books::model::{Book, BookInput};
use crate::backend::error::ApiError;
use crate::backend::middleware::AuthUser;
use crate::backend::server::state::SharedBookStore;
use crate::shared::response::ApiResponse;

const NOT_FOUND_MESSAGE: &str = "Book not found";

type BookResponse = Json<ApiResponse<Book>>;

fn parse_id(raw: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw).map_err(|_| ApiError::not_found(NOT_FOUND_MESSAGE))
}

/// List all books in insertion order
pub async fn list_books(
    State(books): State<SharedBookStore>,
) -> Result<Json<ApiResponse<Vec<Book>>>, ApiError> {
    let books = books.list_books().await?;
    Ok(Json(ApiResponse::ok("Books retrieved successfully", books)))
}

/// Fetch a single book
pub async fn get_book(
    State(books): State<SharedBookStore>,
    Path(id): Path<String>,
) -> Result<BookResponse, ApiError> {
    let id = parse_id(&id)?;
    let book = books
        .find_book(id)
        .await?
        .ok_or_else(|| ApiError::not_found(NOT_FOUND_MESSAGE))?;

    Ok(Json(ApiResponse::ok("Book retrieved successfully", book)))
}

/// Create a book
pub async fn create_book(
    State(books): State<SharedBookStore>,
    AuthUser(user): AuthUser,
    payload: Result<Json<BookInput>, JsonRejection>,
) -> Result<(StatusCode, BookResponse), ApiError> {
    let Json(input) = payload?;
    let book = books.insert_book(input.into_new_book()?).await?;

    tracing::info!("Book {} created by user {}", book.id, user.user_id);
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok("Book created successfully", book)),
    ))
}

/// Apply the provided fields to an existing book
pub async fn update_book(
    State(books): State<SharedBookStore>,
    AuthUser(user): AuthUser,
    Path(id): Path<String>,
    payload: Result<Json<BookInput>, JsonRejection>,
) -> Result<BookResponse, ApiError> {
    let id = parse_id(&id)?;
    let Json(input) = payload?;

    let existing = books
        .find_book(id)
        .await?
        .ok_or_else(|| ApiError::not_found(NOT_FOUND_MESSAGE))?;
    let merged = input.merge_into(&existing)?;

    // The book may have been deleted between the read and the write
    let book = books
        .update_book(&merged)
        .await?
        .ok_or_else(|| ApiError::not_found(NOT_FOUND_MESSAGE))?;

    tracing::info!("Book {} updated by user {}", book.id, user.user_id);
    Ok(Json(ApiResponse::ok("Book updated successfully", book)))
}

/// Delete a book, returning it
pub async fn delete_book(
    State(books): State<SharedBookStore>,
    AuthUser(user): AuthUser,
    Path(id): Path<String>,
) -> Result<BookResponse, ApiError> {
    let id = parse_id(&id)?;
    let book = books
        .delete_book(id)
        .await?
        .ok_or_else(|| ApiError::not_found(NOT_FOUND_MESSAGE))?;

    tracing::info!("Book {} deleted by user {}", book.id, user.user_id);
    Ok(Json(ApiResponse::ok("Book deleted successfully", book)))
}
