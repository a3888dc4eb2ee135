//! Storage layer for the bookshelf service.
//!
//! Provides SQLite connection pooling (via `r2d2`), WAL-mode initialization,
//! the idempotent schema/seed step, and the read queries behind the HTTP API.
//!
//! # Design decisions
//!
//! - **SQLite with WAL mode**: a single file-backed store, no external
//!   database process. WAL lets concurrent readers proceed while a writer
//!   holds the lock; lock contention is left to the engine.
//! - **`r2d2` connection pool**: each operation checks out a connection and
//!   returns it on drop, so the acquire/use/release scope is enforced by
//!   ownership rather than by explicit close calls.
//! - **Explicit ids**: `books.id` is an `INTEGER PRIMARY KEY` populated with
//!   caller-assigned values, never left to the rowid allocator.

mod books;
mod pool;
mod schema;

pub use books::{get_book, list_books, DbError};
pub use pool::{create_pool, DbPool, DbRuntimeSettings, PoolError};
pub use schema::{ensure_schema, SchemaError, SEED_BOOKS};
