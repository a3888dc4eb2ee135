//! Read queries over the `books` table.

use bookshelf_types::Book;
use rusqlite::{Connection, OptionalExtension, Row};
use thiserror::Error;

/// Errors surfaced by book queries.
#[derive(Debug, Error)]
pub enum DbError {
    /// A database operation failed.
    #[error("book query failed: {0}")]
    Query(#[from] rusqlite::Error),
}

fn book_from_row(row: &Row<'_>) -> rusqlite::Result<Book> {
    Ok(Book {
        id: row.get(0)?,
        title: row.get(1)?,
        author: row.get(2)?,
        year: row.get(3)?,
    })
}

/// Returns every book in the catalog.
///
/// No ordering is applied; rows come back in whatever order SQLite scans
/// them. An empty table yields an empty vector.
///
/// # Errors
///
/// Returns `DbError::Query` on SQL failure.
pub fn list_books(conn: &Connection) -> Result<Vec<Book>, DbError> {
    let mut stmt = conn.prepare_cached("SELECT id, title, author, year FROM books")?;
    let books = stmt
        .query_map([], book_from_row)?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(books)
}

/// Looks up a single book by id.
///
/// Returns `Ok(None)` when no row has that id.
///
/// # Errors
///
/// Returns `DbError::Query` on SQL failure.
pub fn get_book(conn: &Connection, id: i64) -> Result<Option<Book>, DbError> {
    let book = conn
        .prepare_cached("SELECT id, title, author, year FROM books WHERE id = ?1")?
        .query_row([id], book_from_row)
        .optional()?;
    Ok(book)
}
