//! # HTTP Request Handlers
//!
//! - `root`: API banner and health check
//! - `auth`: Register and login, delegating to the `AuthController`
//! - `users`: Current user profile
//!
//! ## Handler Pattern
//! Handlers are async functions that:
//! 1. Extract data from the request (state, session, validated JSON body)
//! 2. Call business logic
//! 3. Return a response, or an `AppError` that renders as one

pub mod auth;
pub mod root;
pub mod users;
