//! PostgreSQL connection settings.
//!
//! # Environment Variables
//!
//! - `DATABASE_URL`: PostgreSQL connection string (required by the server)
//! - `DATABASE_MAX_CONNECTIONS`: pool size (default: 10)
//! - `DATABASE_ACQUIRE_TIMEOUT_SECS`: how long a request may wait for a pooled
//!   connection (default: 5)
//! - `DATABASE_CONNECT_TIMEOUT_SECS`: how long the initial connect may take
//!   (default: 5)
//!
//! The gates themselves never time out. A slow user lookup is bounded by the
//! acquire timeout here.

use std::env;
use std::time::Duration;

use crate::parsed_or;

#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub url: Option<String>,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
    pub connect_timeout: Duration,
}

impl DatabaseConfig {
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    pub fn from_vars<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            url: lookup("DATABASE_URL").filter(|url| !url.trim().is_empty()),
            max_connections: parsed_or(&lookup, "DATABASE_MAX_CONNECTIONS", 10),
            acquire_timeout: Duration::from_secs(parsed_or(
                &lookup,
                "DATABASE_ACQUIRE_TIMEOUT_SECS",
                5,
            )),
            connect_timeout: Duration::from_secs(parsed_or(
                &lookup,
                "DATABASE_CONNECT_TIMEOUT_SECS",
                5,
            )),
        }
    }
}
