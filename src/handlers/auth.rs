use crate::auth::types::{LoginRequest, RegistrationRequest};
use crate::error::AppResult;
use crate::state::AppState;
use crate::validation::ValidatedJson;
use axum::{extract::State, response::Response};
use tower_sessions::Session;

pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<RegistrationRequest>,
) -> AppResult<Response> {
    state.auth.register(req).await
}

pub async fn login(
    State(state): State<AppState>,
    session: Session,
    ValidatedJson(req): ValidatedJson<LoginRequest>,
) -> AppResult<Response> {
    state.auth.login(session, req).await
}
