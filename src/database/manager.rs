use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;
use thiserror::Error;
use tracing::info;

/// Errors from the storage layer
#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("Missing configuration: {0}")]
    ConfigMissing(&'static str),

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

/// Open the process-scoped connection pool. Called once at startup; the pool
/// is shared by every in-flight request and released via [`close`] on
/// shutdown. The driver pools connections internally, so no further locking
/// is needed here.
pub async fn connect(database_url: &str, max_connections: u32) -> Result<SqlitePool, DatabaseError> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await?;

    info!("Opened database pool for: {}", database_url);
    Ok(pool)
}

/// Open an in-memory database with the schema applied. Each call returns an
/// isolated store; a single connection keeps the memory database alive.
pub async fn connect_in_memory() -> Result<SqlitePool, DatabaseError> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await?;

    super::schema::ensure_schema(&pool).await?;
    Ok(pool)
}

/// Pings the pool to ensure connectivity
pub async fn health_check(pool: &SqlitePool) -> Result<(), DatabaseError> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Close the pool (e.g., on shutdown)
pub async fn close(pool: &SqlitePool) {
    pool.close().await;
    info!("Closed database pool");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn in_memory_pool_answers_health_check() {
        let pool = connect_in_memory().await.expect("pool");
        health_check(&pool).await.expect("health");
        close(&pool).await;
    }
}
