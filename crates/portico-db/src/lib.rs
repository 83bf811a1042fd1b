//! # Portico DB
//!
//! PostgreSQL access for the Portico API.
//!
//! - [`schema`]: idempotent DDL for the `users` and `profiles` tables
//! - [`users`]: the [`UserStore`] lookup the login gate depends on, plus user inserts
//! - [`profiles`]: profile reads and writes
//!
//! # Example
//!
//! ```ignore
//! use portico_config::DatabaseConfig;
//! use portico_db::{PgUserStore, init_db_pool, schema::ensure_schema};
//!
//! let pool = init_db_pool(&DatabaseConfig::from_env()).await?;
//! ensure_schema(&pool).await?;
//! let users = PgUserStore::new(pool.clone());
//! ```

pub mod profiles;
pub mod schema;
pub mod users;

use anyhow::Context;
use portico_config::DatabaseConfig;
use sqlx::postgres::PgPoolOptions;

// Re-export PgPool for convenience
pub use sqlx::PgPool;
pub use users::{PgUserStore, UserStore};

/// Connects a PostgreSQL pool using the sizing and timeouts in `config`.
///
/// The acquire timeout is the only bound on how long a request can wait on
/// the database, since the HTTP gates do not time out on their own.
///
/// # Errors
///
/// Fails if `DATABASE_URL` is unset or the first connection cannot be made
/// within the connect timeout.
pub async fn init_db_pool(config: &DatabaseConfig) -> anyhow::Result<PgPool> {
    let database_url = config
        .url
        .as_deref()
        .context("DATABASE_URL must be set")?;

    let pool = tokio::time::timeout(
        config.connect_timeout,
        PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(config.acquire_timeout)
            .connect(database_url),
    )
    .await
    .context("Timed out connecting to database")?
    .context("Failed to connect to database")?;

    tracing::info!(
        max_connections = config.max_connections,
        acquire_timeout_secs = config.acquire_timeout.as_secs(),
        "Database pool ready"
    );

    Ok(pool)
}

