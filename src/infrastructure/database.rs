// src/infrastructure/database.rs
use sqlx::{SqlitePool, sqlite::SqlitePoolOptions};

/// Open a SQLite pool. `sqlite::memory:` databases are private to each
/// connection, so callers using one should pass `max_connections = 1`.
pub async fn init_pool(database_url: &str, max_connections: u32) -> Result<SqlitePool, sqlx::Error> {
    SqlitePoolOptions::new()
        .max_connections(max_connections.max(1))
        .idle_timeout(None)
        .max_lifetime(None)
        .connect(database_url)
        .await
}
