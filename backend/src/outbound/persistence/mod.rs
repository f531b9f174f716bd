//! PostgreSQL persistence adapter using Diesel ORM.
//!
//! Concrete implementation of the thread item store port, backed by
//! PostgreSQL via `diesel-async` with `bb8` connection pooling. Row models
//! and schema definitions are internal; repositories translate rows into
//! domain types and database failures into port errors, and nothing else.

mod diesel_thread_item_repository;
mod models;
mod pool;
mod schema;

pub use diesel_thread_item_repository::DieselThreadItemRepository;
pub use pool::{DbConnection, DbPool, PoolConfig, PoolError};

use diesel::Connection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};

/// Migrations compiled into the binary, applied at startup.
const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

/// Error raised when embedded migrations cannot be applied.
#[derive(Debug, thiserror::Error)]
#[error("database migration failed: {message}")]
pub struct MigrationError {
    message: String,
}

impl MigrationError {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Apply pending embedded migrations against the given database.
///
/// Migrations run on a dedicated blocking thread with a synchronous
/// connection; the migration harness has no async surface.
pub async fn run_migrations(database_url: &str) -> Result<(), MigrationError> {
    let url = database_url.to_owned();
    tokio::task::spawn_blocking(move || {
        let mut conn = diesel::PgConnection::establish(&url)
            .map_err(|err| MigrationError::new(err.to_string()))?;
        conn.run_pending_migrations(MIGRATIONS)
            .map(|_| ())
            .map_err(|err| MigrationError::new(err.to_string()))
    })
    .await
    .map_err(|err| MigrationError::new(err.to_string()))?
}
