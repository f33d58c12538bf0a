//! Password hashing with bcrypt.
//!
//! bcrypt is deliberately slow, so both operations run on tokio's blocking
//! pool instead of stalling a runtime worker.

use crate::error::{AppError, AppResult};

pub async fn hash_password(password: String, cost: u32) -> AppResult<String> {
    let hashed = tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
        .await
        .map_err(|e| AppError::Internal(format!("Hashing task failed: {}", e)))??;

    Ok(hashed)
}

/// Returns `Ok(false)` on mismatch; `Err` only when the stored hash is unusable.
pub async fn verify_password(password: String, hash: String) -> AppResult<bool> {
    let matches = tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
        .await
        .map_err(|e| AppError::Internal(format!("Verification task failed: {}", e)))??;

    Ok(matches)
}
