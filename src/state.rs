//! # Application State
//!
//! Shared resources handed to every request handler through axum's `State`
//! extractor. Built once in `main` and passed explicitly to `app::build_app`,
//! so tests can create as many independent instances as they like.

use crate::auth::controller::{AuthController, SqliteAuthController};
use crate::config::Config;
use anyhow::{Context, Result};
use sqlx::sqlite::SqlitePool;
use std::sync::Arc;

/// Shared application state
///
/// Cloned for every request; both fields are cheap to clone (`SqlitePool`
/// is a handle to a shared pool, `Arc` only copies a pointer).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool, also used by the session store
    pub db: SqlitePool,

    /// Business logic behind `/api/auth`
    pub auth: Arc<dyn AuthController>,
}

impl AppState {
    /// Connect to the database, run migrations and build the default
    /// controller.
    ///
    /// # Errors
    /// Returns an error if the database is unreachable or a migration fails.
    /// Startup treats either as fatal.
    pub async fn new(config: &Config) -> Result<Self> {
        let db = SqlitePool::connect(&config.database_url)
            .await
            .with_context(|| format!("failed to connect to {}", config.database_url))?;

        migrate(&db).await?;

        Ok(Self::with_pool(db, config.bcrypt_cost))
    }

    pub fn with_pool(db: SqlitePool, bcrypt_cost: u32) -> Self {
        let auth = Arc::new(SqliteAuthController::new(db.clone(), bcrypt_cost));
        Self { db, auth }
    }
}

/// Apply the embedded migrations from `./migrations`
pub async fn migrate(db: &SqlitePool) -> Result<()> {
    sqlx::migrate!("./migrations")
        .run(db)
        .await
        .context("failed to run database migrations")
}

/// Private in-memory database with the schema applied.
///
/// Pinned to a single connection that never expires: every `:memory:`
/// connection is its own database.
#[cfg(test)]
pub async fn test_pool() -> SqlitePool {
    let pool = sqlx::sqlite::SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    migrate(&pool).await.unwrap();
    pool
}
