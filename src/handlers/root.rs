//! # Root Handlers
//!
//! Endpoints that need no state: the API banner and a health check for
//! load balancers.

use axum::Json;
use serde_json::{json, Value};

/// API banner
///
/// ## Route
/// GET /
///
/// ## Response
/// ```json
/// { "message": "User Management API" }
/// ```
pub async fn index() -> Json<Value> {
    Json(json!({ "message": "User Management API" }))
}

/// Health check endpoint
///
/// ## Route
/// GET /health
///
/// Always 200 while the process is serving requests.
pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": "user-management-api"
    }))
}
