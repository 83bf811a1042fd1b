//! Profile persistence.
//!
//! Reads skip soft-deleted rows. Orphaned rows (`user_uuid IS NULL`) are
//! returned like any other and only drop out of per-user listings.

use anyhow::{Context, anyhow};
use portico_core::AppError;
use portico_models::Profile;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

const PROFILE_COLUMNS: &str = "pk, uuid, user_uuid, created_at, updated_at, deleted_at";

/// Creates a profile owned by `user_uuid`.
///
/// The owner must exist when the row is written. A dangling owner is rejected
/// with `422` rather than surfacing the foreign-key violation as a `500`.
#[instrument(skip(pool))]
pub async fn create_profile(pool: &PgPool, user_uuid: Uuid) -> Result<Profile, AppError> {
    let query = format!(
        "INSERT INTO profiles (uuid, user_uuid) VALUES ($1, $2) RETURNING {PROFILE_COLUMNS}"
    );

    sqlx::query_as::<_, Profile>(&query)
        .bind(Uuid::new_v4())
        .bind(user_uuid)
        .fetch_one(pool)
        .await
        .map_err(|err| {
            let dangling_owner = err
                .as_database_error()
                .is_some_and(|db_err| db_err.is_foreign_key_violation());

            if dangling_owner {
                AppError::unprocessable(anyhow!("User with id {} does not exist", user_uuid))
            } else {
                AppError::database(anyhow::Error::new(err).context("Failed to insert profile"))
            }
        })
}

/// Lists every live profile, orphans included.
#[instrument(skip(pool))]
pub async fn list_profiles(pool: &PgPool) -> Result<Vec<Profile>, AppError> {
    let query = format!(
        "SELECT {PROFILE_COLUMNS} FROM profiles WHERE deleted_at IS NULL ORDER BY pk"
    );

    sqlx::query_as::<_, Profile>(&query)
        .fetch_all(pool)
        .await
        .context("Failed to fetch profiles")
        .map_err(AppError::database)
}

/// Lists the live profiles owned by `user_uuid`.
#[instrument(skip(pool))]
pub async fn list_profiles_for_user(
    pool: &PgPool,
    user_uuid: Uuid,
) -> Result<Vec<Profile>, AppError> {
    let query = format!(
        "SELECT {PROFILE_COLUMNS} FROM profiles \
         WHERE user_uuid = $1 AND deleted_at IS NULL ORDER BY pk"
    );

    sqlx::query_as::<_, Profile>(&query)
        .bind(user_uuid)
        .fetch_all(pool)
        .await
        .context("Failed to fetch profiles by user")
        .map_err(AppError::database)
}

/// Fetches one live profile.
#[instrument(skip(pool))]
pub async fn get_profile(pool: &PgPool, uuid: Uuid) -> Result<Profile, AppError> {
    let query = format!(
        "SELECT {PROFILE_COLUMNS} FROM profiles WHERE uuid = $1 AND deleted_at IS NULL"
    );

    sqlx::query_as::<_, Profile>(&query)
        .bind(uuid)
        .fetch_optional(pool)
        .await
        .context("Failed to fetch profile by ID")
        .map_err(AppError::database)?
        .ok_or_else(|| AppError::not_found(anyhow!("Profile with id {} not found", uuid)))
}

/// Stamps `deleted_at` on a live profile and returns the updated row.
#[instrument(skip(pool))]
pub async fn soft_delete_profile(pool: &PgPool, uuid: Uuid) -> Result<Profile, AppError> {
    let query = format!(
        "UPDATE profiles SET deleted_at = CURRENT_TIMESTAMP, updated_at = CURRENT_TIMESTAMP \
         WHERE uuid = $1 AND deleted_at IS NULL RETURNING {PROFILE_COLUMNS}"
    );

    sqlx::query_as::<_, Profile>(&query)
        .bind(uuid)
        .fetch_optional(pool)
        .await
        .context("Failed to delete profile")
        .map_err(AppError::database)?
        .ok_or_else(|| AppError::not_found(anyhow!("Profile with id {} not found", uuid)))
}
