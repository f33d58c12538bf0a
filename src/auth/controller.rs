//! # Auth Controller
//!
//! Business logic behind the auth routes. Handlers only reach it after the
//! request body has passed validation, and relay whatever `Response` it
//! builds without touching it.
//!
//! The trait is the seam between routing and business logic: `AppState`
//! holds an `Arc<dyn AuthController>`, so tests can swap in a double.

use crate::auth::password::{hash_password, verify_password};
use crate::auth::types::{LoginRequest, RegistrationRequest};
use crate::auth::SESSION_USER_KEY;
use crate::db::users;
use crate::error::{AppError, AppResult};
use async_trait::async_trait;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use sqlx::SqlitePool;
use tower_sessions::Session;

#[async_trait]
pub trait AuthController: Send + Sync {
    async fn register(&self, request: RegistrationRequest) -> AppResult<Response>;

    async fn login(&self, session: Session, request: LoginRequest) -> AppResult<Response>;
}

/// Default controller: bcrypt hashes in SQLite, logins tracked in the session.
pub struct SqliteAuthController {
    db: SqlitePool,
    bcrypt_cost: u32,
}

impl SqliteAuthController {
    pub fn new(db: SqlitePool, bcrypt_cost: u32) -> Self {
        Self { db, bcrypt_cost }
    }
}

#[async_trait]
impl AuthController for SqliteAuthController {
    /// ## Response
    /// 201 with `{ "message": "User registered successfully", "user": {...} }`,
    /// 409 when the email or username is taken.
    async fn register(&self, request: RegistrationRequest) -> AppResult<Response> {
        if users::find_by_email_or_username(&self.db, &request.email, &request.username)
            .await?
            .is_some()
        {
            return Err(AppError::Conflict("User already exists".to_string()));
        }

        let RegistrationRequest {
            username,
            email,
            password,
        } = request;

        let password_hash = hash_password(password, self.bcrypt_cost).await?;
        let user = users::create_user(&self.db, &username, &email, &password_hash).await?;

        tracing::info!(user_id = %user.id, "User registered");

        Ok((
            StatusCode::CREATED,
            Json(json!({
                "message": "User registered successfully",
                "user": user
            })),
        )
            .into_response())
    }

    /// ## Response
    /// 200 with `{ "message": "Login successful", "user": {...} }` plus the
    /// session cookie; 401 for an unknown email or a wrong password (the
    /// two are indistinguishable to the client).
    async fn login(&self, session: Session, request: LoginRequest) -> AppResult<Response> {
        let invalid = || AppError::Unauthorized("Invalid credentials".to_string());

        let user = users::find_by_email(&self.db, &request.email)
            .await?
            .ok_or_else(invalid)?;

        if !verify_password(request.password, user.password_hash.clone()).await? {
            tracing::debug!(user_id = %user.id, "Rejected login with wrong password");
            return Err(invalid());
        }

        // New session id on privilege change
        session
            .cycle_id()
            .await
            .map_err(|e| AppError::Internal(format!("Session error: {}", e)))?;
        session
            .insert(SESSION_USER_KEY, &user.id)
            .await
            .map_err(|e| AppError::Internal(format!("Session error: {}", e)))?;

        tracing::info!(user_id = %user.id, "User logged in");

        Ok(Json(json!({
            "message": "Login successful",
            "user": user
        }))
        .into_response())
    }
}
