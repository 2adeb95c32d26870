//! SQLite pool setup and `items` table DDL.

use crate::config::ServiceConfig;
use crate::error::AppError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

pub const ITEMS_TABLE: &str = "items";

/// Open the pool for `config.database_url`, creating the database file if missing,
/// then make sure the schema exists.
pub async fn connect(config: &ServiceConfig) -> Result<SqlitePool, AppError> {
    let opts = SqliteConnectOptions::from_str(&config.database_url)?.create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(opts)
        .await?;
    tracing::info!(url = %config.database_url, "database pool opened");
    ensure_items_table(&pool).await?;
    Ok(pool)
}

/// Single-connection in-memory database with the schema applied. Every connection to
/// `:memory:` is its own database, so the one connection is never recycled.
pub async fn open_in_memory() -> Result<SqlitePool, AppError> {
    let opts = SqliteConnectOptions::from_str("sqlite::memory:")?;
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(opts)
        .await?;
    ensure_items_table(&pool).await?;
    Ok(pool)
}

/// Create `items` and its id index if absent. Safe to run against an initialized file.
pub async fn ensure_items_table(pool: &SqlitePool) -> Result<(), AppError> {
    let ddl = format!(
        r#"
        CREATE TABLE IF NOT EXISTS {} (
            id INTEGER NOT NULL PRIMARY KEY,
            name VARCHAR(200) NOT NULL
        )
        "#,
        ITEMS_TABLE
    );
    sqlx::query(&ddl).execute(pool).await?;
    let index = format!("CREATE INDEX IF NOT EXISTS ix_{0}_id ON {0} (id)", ITEMS_TABLE);
    sqlx::query(&index).execute(pool).await?;
    tracing::debug!(table = ITEMS_TABLE, "schema ensured");
    Ok(())
}
