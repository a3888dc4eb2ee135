//! API handlers for the bookshelf server.

use crate::AppState;
use axum::{
    extract::{Extension, FromRequestParts, Json, Path},
    http::{request::Parts, StatusCode},
    response::{IntoResponse, Response},
};
use bookshelf_db::DbError;
use bookshelf_types::Book;
use serde_json::{json, Value};
use std::sync::Arc;
use thiserror::Error;

/// API error type mapping to HTTP status codes.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The addressed book does not exist.
    #[error("not found")]
    NotFound,
    /// Storage or runtime failure. The detail is logged, never returned.
    #[error("internal server error: {0}")]
    Internal(String),
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        ApiError::Internal(e.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound => (StatusCode::NOT_FOUND, "not found"),
            ApiError::Internal(detail) => {
                tracing::error!(error = %detail, "request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal server error")
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

/// Book id taken from the `{book_id}` path segment.
///
/// Only a non-empty run of ASCII digits is accepted. Anything else is
/// treated as if no route had matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookId(pub i64);

/// Rejection produced by the [`BookId`] extractor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookIdRejection {
    /// The segment is not a non-negative integer; answered like an unknown route.
    NotAnId,
    /// Digits only, but too large for any stored id.
    OutOfRange,
}

impl IntoResponse for BookIdRejection {
    fn into_response(self) -> Response {
        match self {
            // Same bare 404 the router produces for unmatched paths.
            BookIdRejection::NotAnId => StatusCode::NOT_FOUND.into_response(),
            BookIdRejection::OutOfRange => ApiError::NotFound.into_response(),
        }
    }
}

impl BookId {
    /// Parses a raw path segment.
    pub fn parse(segment: &str) -> Result<Self, BookIdRejection> {
        if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
            return Err(BookIdRejection::NotAnId);
        }
        segment
            .parse()
            .map(BookId)
            .map_err(|_| BookIdRejection::OutOfRange)
    }
}

impl<S> FromRequestParts<S> for BookId
where
    S: Send + Sync,
{
    type Rejection = BookIdRejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(segment) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| BookIdRejection::NotAnId)?;
        BookId::parse(&segment)
    }
}

/// Runs a storage operation on the blocking pool with one pooled connection.
///
/// The connection is returned to the pool when the closure finishes, on both
/// the success and the error path.
async fn with_connection<T, F>(state: Arc<AppState>, op: F) -> Result<T, ApiError>
where
    T: Send + 'static,
    F: FnOnce(&rusqlite::Connection) -> Result<T, DbError> + Send + 'static,
{
    tokio::task::spawn_blocking(move || {
        let conn = state
            .pool
            .get()
            .map_err(|e| ApiError::Internal(format!("db connection failed: {}", e)))?;
        op(&conn).map_err(ApiError::from)
    })
    .await
    .map_err(|e| ApiError::Internal(format!("task join error: {}", e)))?
}

/// Handler for `GET /api/health`.
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Handler for `GET /api/books`.
pub async fn list_books_handler(
    Extension(state): Extension<Arc<AppState>>,
) -> Result<Json<Vec<Book>>, ApiError> {
    let books = with_connection(state, bookshelf_db::list_books).await?;
    Ok(Json(books))
}

/// Handler for `GET /api/books/{book_id}`.
pub async fn get_book_handler(
    Extension(state): Extension<Arc<AppState>>,
    BookId(id): BookId,
) -> Result<Json<Book>, ApiError> {
    with_connection(state, move |conn| bookshelf_db::get_book(conn, id))
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound)
}
