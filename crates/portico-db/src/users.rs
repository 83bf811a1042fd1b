//! User persistence.
//!
//! [`UserStore`] is the seam the login gate depends on. The server injects a
//! [`PgUserStore`]; tests inject an in-memory map.

use anyhow::{Context, anyhow};
use async_trait::async_trait;
use portico_core::AppError;
use portico_models::{CreateUserDto, User};
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

const USER_COLUMNS: &str = "pk, uuid, email, is_admin, created_at, updated_at, deleted_at";

/// Resolves a user identifier to exactly one live user.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Fails with a `404` [`AppError`] when no live user has this id.
    async fn find_user_by_id(&self, id: Uuid) -> Result<User, AppError>;
}

/// [`UserStore`] backed by the `users` table.
#[derive(Clone, Debug)]
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    #[instrument(skip(self))]
    async fn find_user_by_id(&self, id: Uuid) -> Result<User, AppError> {
        let query = format!(
            "SELECT {USER_COLUMNS} FROM users WHERE uuid = $1 AND deleted_at IS NULL"
        );

        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .context("Failed to fetch user by ID")
            .map_err(AppError::database)?
            .ok_or_else(|| AppError::not_found(anyhow!("User with id {} not found", id)))
    }
}

/// Inserts a user with a fresh identifier.
#[instrument(skip(pool))]
pub async fn create_user(pool: &PgPool, dto: CreateUserDto) -> Result<User, AppError> {
    let query = format!(
        "INSERT INTO users (uuid, email, is_admin) VALUES ($1, $2, $3) RETURNING {USER_COLUMNS}"
    );

    sqlx::query_as::<_, User>(&query)
        .bind(Uuid::new_v4())
        .bind(&dto.email)
        .bind(dto.is_admin)
        .fetch_one(pool)
        .await
        .map_err(|err| {
            let duplicate = err
                .as_database_error()
                .is_some_and(|db_err| db_err.is_unique_violation());

            if duplicate {
                AppError::unprocessable(anyhow!("User with email {} already exists", dto.email))
            } else {
                AppError::database(anyhow::Error::new(err).context("Failed to insert user"))
            }
        })
}
