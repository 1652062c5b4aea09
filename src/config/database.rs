//! SQLite connection pool initialization.
//!
//! The database URL is read from the `DATABASE_URL` environment variable and
//! defaults to a local file. Migrations under `./migrations` are applied once
//! here; the schema is otherwise never touched by the application.

use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;
use std::env;

/// Initializes the connection pool and applies pending migrations.
///
/// The returned pool is cheaply cloneable and is the only piece of shared
/// state in the process; every request handler acquires connections from it.
///
/// # Panics
///
/// Panics if the database cannot be opened or a migration fails. This runs
/// once at startup, before the server accepts any traffic.
pub async fn init_db_pool() -> SqlitePool {
    let database_url =
        env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://gradebook.db?mode=rwc".to_string());

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await
        .expect("Failed to connect to database");

    sqlx::migrate!()
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}
