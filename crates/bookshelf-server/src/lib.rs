//! Bookshelf server library logic.

pub mod api;
pub mod config;

use axum::{routing::get, Extension, Router};
use bookshelf_db::DbPool;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool. The schema must already be ensured.
    pub pool: DbPool,
}

/// Builds the application router with all routes.
///
/// Only `GET` is wired. Paths that match nothing, including a non-numeric
/// `{book_id}`, get a bare 404.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(api::health))
        .route("/api/books", get(api::list_books_handler))
        .route("/api/books/{book_id}", get(api::get_book_handler))
        .layer(TraceLayer::new_for_http())
        .layer(Extension(Arc::new(state)))
}
