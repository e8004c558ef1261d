//! Database module: pool setup, schema DDL and the typed store.
//!
//! Layout:
//! - `schema.rs`: SQL DDL for initializing the database
//! - `store.rs`: typed query methods, one parameterized statement each

pub mod schema;
pub mod store;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::path::Path;
use std::time::Duration;

pub use schema::SQLITE_INIT;
pub use store::Store;

pub type SqlitePool = Pool<Sqlite>;

/// Create the SQLite connection pool
///
/// Creates the database file (and its parent directory) on first run.
pub async fn create_pool(path: impl AsRef<Path>) -> Result<SqlitePool, sqlx::Error> {
    tracing::info!("Opening database at: {:?}", path.as_ref());

    if let Some(parent) = path.as_ref().parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent).map_err(|e| {
                tracing::error!("Failed to create database directory: {}", e);
                sqlx::Error::Io(e)
            })?;
        }
    }

    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(10)
        .acquire_timeout(Duration::from_secs(10))
        .idle_timeout(Duration::from_secs(600))
        .connect_with(options)
        .await?;

    tracing::info!("Database connection pool created successfully");

    Ok(pool)
}
