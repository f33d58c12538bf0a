//! # Configuration Management
//!
//! Configuration comes from the environment ("12-factor app" style), with an
//! optional `.env` file loaded first for local development.
//!
//! ## Environment Variables
//! - `HOST`: Server bind address (default: 0.0.0.0)
//! - `PORT`: Server port (default: 3000)
//! - `DATABASE_URL`: SQLite database connection string
//! - `BCRYPT_COST`: Work factor for password hashing (default: 12)
//! - `SESSION_TTL_HOURS`: Session inactivity expiry in hours (default: 24)

use anyhow::{bail, Context, Result};
use std::env;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_DATABASE_URL: &str = "sqlite:users.db?mode=rwc";
pub const DEFAULT_SESSION_TTL_HOURS: i64 = 24;

/// Application configuration
///
/// Holds every value needed to start the server. Cloned into startup code
/// only; handlers never see it directly.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server host/IP address to bind to
    /// Examples: "127.0.0.1" (localhost only), "0.0.0.0" (all interfaces)
    pub host: String,

    /// Server port number (1-65535)
    pub port: u16,

    /// SQLite database connection URL
    /// The "mode=rwc" suffix means: read, write, create if not exists
    pub database_url: String,

    /// bcrypt work factor. Valid range is 4..=31; each step doubles the cost.
    pub bcrypt_cost: u32,

    /// Hours of inactivity after which a login session expires
    pub session_ttl_hours: i64,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Loads `.env` if present (a missing file is not an error), then reads
    /// each variable, falling back to defaults. Values that are present but
    /// unparsable are reported as errors instead of silently defaulted.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("PORT must be an integer in 1..=65535, got '{raw}'"))?,
            None => DEFAULT_PORT,
        };

        let bcrypt_cost = match lookup("BCRYPT_COST") {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("BCRYPT_COST must be an integer, got '{raw}'"))?,
            None => bcrypt::DEFAULT_COST,
        };
        if !(4..=31).contains(&bcrypt_cost) {
            bail!("BCRYPT_COST must be between 4 and 31, got {bcrypt_cost}");
        }

        let session_ttl_hours = match lookup("SESSION_TTL_HOURS") {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("SESSION_TTL_HOURS must be an integer, got '{raw}'"))?,
            None => DEFAULT_SESSION_TTL_HOURS,
        };
        if session_ttl_hours <= 0 {
            bail!("SESSION_TTL_HOURS must be positive, got {session_ttl_hours}");
        }

        Ok(Config {
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port,
            database_url: lookup("DATABASE_URL")
                .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            bcrypt_cost,
            session_ttl_hours,
        })
    }

    /// Get the socket address to bind the server to, e.g. "0.0.0.0:3000"
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn session_ttl(&self) -> time::Duration {
        time::Duration::hours(self.session_ttl_hours)
    }
}
