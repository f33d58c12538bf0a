//! # User Management API
//!
//! HTTP API for registering users and logging them in.
//!
//! Every auth request body is checked against its field rules before any
//! business logic runs; all violations are reported together as a 400.

mod app;         // Router assembly (routes + middleware)
mod auth;        // Request types, password hashing, auth controller
mod config;      // Configuration from environment variables
mod db;          // Database models and queries
mod error;       // Error type and HTTP error responses
mod handlers;    // HTTP request handlers
mod middleware;  // Session guard for protected routes
mod state;       // Shared application state
mod validation;  // Validated JSON extractor

use crate::config::Config;
use crate::state::AppState;
use tower_sessions_sqlx_store::SqliteStore;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Main application entry point
///
/// 1. Sets up logging
/// 2. Loads configuration from the environment
/// 3. Connects to the database and runs migrations (fatal on failure)
/// 4. Prepares the session store
/// 5. Builds the router and starts listening
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Default: info for dependencies, debug for this crate.
    // Override with RUST_LOG.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,user_management_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    tracing::info!("Configuration loaded: {:?}", config);

    let app_state = match AppState::new(&config).await {
        Ok(state) => state,
        Err(e) => {
            tracing::error!("Database initialization failed: {:#}", e);
            return Err(e);
        }
    };
    tracing::info!("Database connected");

    // Session data lives in the same SQLite database as the users
    let session_store = SqliteStore::new(app_state.db.clone());
    session_store.migrate().await?;

    let app = app::build_app(app_state, session_store, config.session_ttl());

    let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
    tracing::info!("Server running on port {}", config.port);
    axum::serve(listener, app).await?;

    Ok(())
}
