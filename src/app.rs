//! # Application Router
//!
//! Assembles routes, middleware and state into the `Router` served by
//! `main`. Everything it needs is passed in, so tests build the same app
//! against an in-memory database and session store.

use crate::handlers::auth::{login, register};
use crate::handlers::root::{health_check, index};
use crate::handlers::users::get_current_user;
use crate::middleware::auth::require_auth;
use crate::state::AppState;
use axum::{
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use time::Duration;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tower_sessions::{Expiry, SessionManagerLayer, SessionStore};

/// Build the full application
///
/// ## Routes
/// - `GET  /`                   API banner
/// - `GET  /health`             health check
/// - `POST /api/auth/register`  validated, then `AuthController::register`
/// - `POST /api/auth/login`     validated, then `AuthController::login`
/// - `GET  /api/users/me`       requires a logged-in session
///
/// ## Middleware (outermost first)
/// request tracing → CORS (any origin) → sessions
pub fn build_app<S>(state: AppState, session_store: S, session_ttl: Duration) -> Router
where
    S: SessionStore + Clone,
{
    // Sessions expire after a period of inactivity
    let session_layer =
        SessionManagerLayer::new(session_store).with_expiry(Expiry::OnInactivity(session_ttl));

    // No origin allow-list
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(index))
        .route("/health", get(health_check))
        .nest("/api/auth", auth_routes())
        .nest("/api/users", user_routes())
        // Layers wrap everything added above; the last one added runs first
        .layer(session_layer)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
}

fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/me", get(get_current_user))
        .route_layer(axum_middleware::from_fn(require_auth))
}
