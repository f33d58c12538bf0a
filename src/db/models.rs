//! # Database Models
//!
//! Row types for the SQLite tables. Timestamps are stored as RFC 3339 text.

use chrono::Utc;
use serde::Serialize;
use uuid::Uuid;

/// User account
///
/// `password_hash` is never serialized, so a `User` can be returned from
/// handlers as-is.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct User {
    /// Unique identifier (UUID v4)
    pub id: String,

    /// Unique username, stored trimmed
    pub username: String,

    /// Unique email address, compared case-insensitively
    pub email: String,

    /// bcrypt hash of the password
    #[serde(skip_serializing)]
    pub password_hash: String,

    /// When the account was created (RFC 3339 timestamp)
    pub created_at: String,

    /// When the account was last updated (RFC 3339 timestamp)
    pub updated_at: String,
}

impl User {
    /// Create a new user with a generated id and both timestamps set to now
    pub fn new(username: String, email: String, password_hash: String) -> Self {
        let now = Utc::now().to_rfc3339();

        Self {
            id: Uuid::new_v4().to_string(),
            username,
            email,
            password_hash,
            created_at: now.clone(),
            updated_at: now,
        }
    }
}
