//! Persistence layer: pool construction, one-time setup, and the
//! read-with-fallback showcase loader.

pub mod bootstrap;
pub mod models;
pub mod repositories;
pub mod showcase;

use sqlx::postgres::PgPoolOptions;

pub type DbPool = sqlx::PgPool;

/// Create a lazy connection pool from a database URL.
///
/// Connections are only established on first use, so an unreachable store
/// surfaces per-query (where the fallback path absorbs it) instead of
/// failing startup. Errors here mean the URL itself is malformed.
pub fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(5)
        .connect_lazy(database_url)
}

/// Verify the database answers a trivial query.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await.map(|_| ())
}
