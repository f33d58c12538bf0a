//! # Authentication
//!
//! Registration and login: the request bodies with their validation rules,
//! password hashing, and the controller that does the actual work once a
//! body has passed validation.
//!
//! ## Flow
//! 1. Handler extracts `ValidatedJson<RegistrationRequest | LoginRequest>`
//! 2. Handler calls the `AuthController` stored in `AppState`
//! 3. The controller's response goes back to the client unchanged

pub mod controller;
pub mod password;
pub mod types;

/// Session key holding the logged-in user's id
pub const SESSION_USER_KEY: &str = "user_id";
