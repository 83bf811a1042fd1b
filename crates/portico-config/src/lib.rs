//! # Portico Config
//!
//! Configuration structures loaded from environment variables:
//!
//! - [`jwt`]: bearer token signing configuration
//! - [`database`]: PostgreSQL pool sizing and timeouts
//! - [`cors`]: CORS (Cross-Origin Resource Sharing) configuration
//! - [`server`]: listen address
//!
//! Every struct exposes `from_env()`, which falls back to development
//! defaults for unset or unparsable variables. Call `dotenvy::dotenv()` first
//! if values should come from a `.env` file.
//!
//! # Example
//!
//! ```ignore
//! use portico_config::{CorsConfig, DatabaseConfig, JwtConfig, ServerConfig};
//!
//! let jwt_config = JwtConfig::from_env();
//! let database_config = DatabaseConfig::from_env();
//! let cors_config = CorsConfig::from_env();
//! let server_config = ServerConfig::from_env();
//! ```

pub mod cors;
pub mod database;
pub mod jwt;
pub mod server;

// Re-export commonly used types at crate root
pub use cors::CorsConfig;
pub use database::DatabaseConfig;
pub use jwt::JwtConfig;
pub use server::ServerConfig;

/// Parses `key` from `lookup`, falling back to `default` when it is unset or
/// does not parse.
pub(crate) fn parsed_or<T, F>(lookup: &F, key: &str, default: T) -> T
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or(default)
}
