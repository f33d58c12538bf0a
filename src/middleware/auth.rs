use crate::auth::SESSION_USER_KEY;
use crate::error::{AppError, AppResult};
use axum::{
    extract::Request,
    middleware::Next,
    response::Response,
};
use tower_sessions::Session;

/// Id of the logged-in user, placed in request extensions by `require_auth`.
#[derive(Debug, Clone)]
pub struct CurrentUserId(pub String);

/// Rejects the request with 401 unless the session carries a user id.
///
/// Routes behind this layer read the id with `Extension<CurrentUserId>`.
pub async fn require_auth(
    session: Session,
    mut request: Request,
    next: Next,
) -> AppResult<Response> {
    let user_id: String = session
        .get(SESSION_USER_KEY)
        .await
        .map_err(|e| AppError::Internal(format!("Session error: {}", e)))?
        .ok_or_else(|| AppError::Unauthorized("Not authenticated".to_string()))?;

    request.extensions_mut().insert(CurrentUserId(user_id));

    Ok(next.run(request).await)
}
