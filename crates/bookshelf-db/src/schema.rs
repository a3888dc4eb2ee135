//! Idempotent schema creation and seeding.
//!
//! The store holds a single `books` table. [`ensure_schema`] creates it when
//! absent and inserts the fixed seed rows with insert-if-absent semantics, so
//! running it any number of times leaves exactly the same five rows behind.

use rusqlite::{params, Connection};
use thiserror::Error;

const CREATE_BOOKS_TABLE: &str = "CREATE TABLE IF NOT EXISTS books (
    id INTEGER PRIMARY KEY,
    title TEXT NOT NULL,
    author TEXT NOT NULL,
    year INTEGER NOT NULL
);";

const INSERT_SEED: &str =
    "INSERT OR IGNORE INTO books (id, title, author, year) VALUES (?1, ?2, ?3, ?4)";

/// The fixed catalog rows as `(id, title, author, year)`.
pub const SEED_BOOKS: [(i64, &str, &str, i64); 5] = [
    (1, "The Rust Programming Language", "Steve Klabnik", 2019),
    (2, "The Go Programming Language", "Alan Donovan", 2015),
    (3, "Designing Data-Intensive Applications", "Martin Kleppmann", 2017),
    (4, "Clean Code", "Robert C. Martin", 2008),
    (5, "Structure and Interpretation of Computer Programs", "Harold Abelson", 1996),
];

/// Errors that can occur while ensuring the schema.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// A statement in the named step failed.
    #[error("schema step '{step}' failed: {source}")]
    ExecutionFailed {
        /// The step that failed.
        step: &'static str,
        /// The underlying SQLite error.
        source: rusqlite::Error,
    },
}

fn step(step: &'static str) -> impl FnOnce(rusqlite::Error) -> SchemaError {
    move |source| SchemaError::ExecutionFailed { step, source }
}

/// Creates the `books` table if needed and inserts any missing seed rows.
///
/// Runs in a single transaction. Rows already present by id are left
/// untouched. Returns the number of seed rows inserted by this call.
///
/// # Errors
///
/// Returns `SchemaError` if any statement fails; the transaction is rolled
/// back on drop.
pub fn ensure_schema(conn: &Connection) -> Result<usize, SchemaError> {
    let tx = conn.unchecked_transaction().map_err(step("begin"))?;

    tx.execute_batch(CREATE_BOOKS_TABLE)
        .map_err(step("create_books_table"))?;

    let mut inserted = 0;
    {
        let mut stmt = tx.prepare(INSERT_SEED).map_err(step("prepare_seed"))?;
        for (id, title, author, year) in SEED_BOOKS {
            let changed = stmt
                .execute(params![id, title, author, year])
                .map_err(step("insert_seed"))?;
            if changed == 0 {
                tracing::debug!(id, "seed row already present, skipping");
            }
            inserted += changed;
        }
    }

    tx.commit().map_err(step("commit"))?;

    Ok(inserted)
}
