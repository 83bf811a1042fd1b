use std::sync::Arc;

use anyhow::Context;
use portico_config::{CorsConfig, DatabaseConfig, JwtConfig};
use portico_db::{PgPool, PgUserStore, UserStore, init_db_pool, schema::ensure_schema};

/// Shared, read-only state handed to every gate and handler.
///
/// Cloning is cheap: the pool and the user store are reference counted.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub users: Arc<dyn UserStore>,
    pub jwt_config: JwtConfig,
    pub cors_config: CorsConfig,
}

impl AppState {
    pub fn new(
        db: PgPool,
        users: Arc<dyn UserStore>,
        jwt_config: JwtConfig,
        cors_config: CorsConfig,
    ) -> Self {
        Self {
            db,
            users,
            jwt_config,
            cors_config,
        }
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("jwt_config", &"<redacted>")
            .field("cors_config", &self.cors_config)
            .finish_non_exhaustive()
    }
}

/// Connects to PostgreSQL, ensures the schema, and wires the user store.
pub async fn init_app_state() -> anyhow::Result<AppState> {
    let db = init_db_pool(&DatabaseConfig::from_env()).await?;
    ensure_schema(&db)
        .await
        .context("Failed to prepare database schema")?;

    Ok(AppState::new(
        db.clone(),
        Arc::new(PgUserStore::new(db)),
        JwtConfig::from_env(),
        CorsConfig::from_env(),
    ))
}
