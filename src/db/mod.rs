//! # Database Module
//!
//! - `models`: Data structures mapped to tables
//! - `users`: Queries on the `users` table
//!
//! The pool itself is created in `AppState::new`, which also runs the
//! embedded migrations from `./migrations`.

pub mod models;
pub mod users;
