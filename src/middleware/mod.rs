//! # Middleware Module
//!
//! Middleware runs before route handlers and can short-circuit the request
//! with an error response before the handler is called.
//!
//! CORS, request tracing and sessions come from `tower-http` and
//! `tower-sessions` and are installed in `app::build_app`.
//!
//! ## Our Middleware
//! - `auth`: Rejects requests without a logged-in session

pub mod auth;
