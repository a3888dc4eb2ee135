//! Shared types for the bookshelf service.
//!
//! The catalog has a single entity, [`Book`]. Both the storage layer and the
//! HTTP layer depend on this crate so the record shape is defined once.

use serde::{Deserialize, Serialize};

/// A single catalog entry.
///
/// Serializes to `{"id", "title", "author", "year"}` in that order. Ids are
/// caller-assigned at seed time rather than generated by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Primary key.
    pub id: i64,
    /// Book title. Never empty.
    pub title: String,
    /// Author name. Never empty.
    pub author: String,
    /// Publication year.
    pub year: i64,
}

impl Book {
    /// Builds a book from borrowed fields.
    pub fn new(id: i64, title: &str, author: &str, year: i64) -> Self {
        Self {
            id,
            title: title.to_string(),
            author: author.to_string(),
            year,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn book_serializes_with_exact_fields() {
        let book = Book::new(4, "Clean Code", "Robert C. Martin", 2008);
        let json = serde_json::to_string(&book).expect("book should serialize");
        assert_eq!(
            json,
            r#"{"id":4,"title":"Clean Code","author":"Robert C. Martin","year":2008}"#
        );
    }

    #[test]
    fn book_deserializes_from_api_shape() {
        let book: Book = serde_json::from_str(
            r#"{"id":2,"title":"The Go Programming Language","author":"Alan Donovan","year":2015}"#,
        )
        .expect("book should deserialize");
        assert_eq!(
            book,
            Book::new(2, "The Go Programming Language", "Alan Donovan", 2015)
        );
    }
}
