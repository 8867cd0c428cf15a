//! SQLite pool construction and table DDL for `bakeries` and `baked_goods`.

use crate::error::AppError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;
use std::time::Duration;

pub const MEMORY_URL: &str = "sqlite::memory:";

const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

/// Open a pool for `database_url`, creating the database file if missing.
/// An in-memory URL gets exactly one connection that never idles out, since each
/// SQLite memory connection is its own database.
pub async fn connect(database_url: &str, max_connections: u32) -> Result<SqlitePool, AppError> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = if database_url == MEMORY_URL {
        SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .acquire_timeout(ACQUIRE_TIMEOUT)
            .connect_with(options)
            .await?
    } else {
        SqlitePoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(ACQUIRE_TIMEOUT)
            .connect_with(options)
            .await?
    };

    tracing::info!(url = %database_url, "database connected");
    Ok(pool)
}

/// Create both tables and the foreign-key index if they do not exist.
pub async fn ensure_tables(pool: &SqlitePool) -> Result<(), AppError> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS bakeries (
            id INTEGER PRIMARY KEY,
            name TEXT NOT NULL,
            created_at DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS baked_goods (
            id INTEGER PRIMARY KEY,
            name TEXT NOT NULL,
            price REAL NOT NULL,
            created_at DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP,
            bakery_id INTEGER REFERENCES bakeries (id)
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_baked_goods_bakery_id ON baked_goods (bakery_id)")
        .execute(pool)
        .await?;

    tracing::debug!("tables ensured");
    Ok(())
}

/// Round-trip a trivial query; used by the readiness probe.
pub async fn ping(pool: &SqlitePool) -> Result<(), AppError> {
    sqlx::query("SELECT 1").fetch_optional(pool).await?;
    Ok(())
}
