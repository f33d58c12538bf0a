//! # User Handlers
//!
//! Routes mounted under `/api/users`, all behind `require_auth`.

use crate::db::models::User;
use crate::db::users;
use crate::error::AppResult;
use crate::middleware::auth::CurrentUserId;
use crate::state::AppState;
use axum::{extract::State, Extension, Json};

/// Get the logged-in user's profile
///
/// ## Route
/// GET /api/users/me
///
/// ## Response
/// ```json
/// {
///   "id": "550e8400-e29b-41d4-a716-446655440000",
///   "username": "alice",
///   "email": "alice@example.com",
///   "created_at": "2024-01-15T10:30:00+00:00",
///   "updated_at": "2024-01-15T10:30:00+00:00"
/// }
/// ```
///
/// 404 if the account was removed while the session was still alive.
pub async fn get_current_user(
    State(state): State<AppState>,
    Extension(CurrentUserId(user_id)): Extension<CurrentUserId>,
) -> AppResult<Json<User>> {
    let user = users::find_by_id(&state.db, &user_id).await?;

    Ok(Json(user))
}
