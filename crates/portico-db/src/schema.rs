//! Idempotent table definitions.
//!
//! Every statement uses `IF NOT EXISTS`, so the server can run
//! [`ensure_schema`] on each start.
//!
//! `profiles` deliberately departs from the historical layout in two places:
//!
//! - The primary key is `pk` alone. The old composite key over
//!   `(pk, uuid, user_uuid)` added nothing, since `pk` and `uuid` were each
//!   unique already.
//! - `user_uuid` is nullable. The foreign key nulls it when the owning user
//!   is deleted or re-keyed, which a `NOT NULL` column would refuse.

use anyhow::Context;
use sqlx::PgPool;
use tracing::instrument;

const CREATE_USERS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS users (
        pk BIGINT GENERATED BY DEFAULT AS IDENTITY PRIMARY KEY,
        uuid UUID NOT NULL UNIQUE,
        email TEXT NOT NULL UNIQUE,
        is_admin BOOLEAN NOT NULL DEFAULT FALSE,
        created_at TIMESTAMPTZ NOT NULL DEFAULT CURRENT_TIMESTAMP,
        updated_at TIMESTAMPTZ,
        deleted_at TIMESTAMPTZ
    )
"#;

const CREATE_PROFILES_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS profiles (
        pk BIGINT GENERATED BY DEFAULT AS IDENTITY PRIMARY KEY,
        uuid UUID NOT NULL UNIQUE,
        user_uuid UUID,
        created_at TIMESTAMPTZ NOT NULL DEFAULT CURRENT_TIMESTAMP,
        updated_at TIMESTAMPTZ,
        deleted_at TIMESTAMPTZ,
        FOREIGN KEY (user_uuid) REFERENCES users (uuid)
            ON UPDATE SET NULL
            ON DELETE SET NULL
    )
"#;

const CREATE_PROFILES_USER_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS profiles_user_uuid_idx ON profiles (user_uuid)";

/// Ensures the `users` relation exists.
#[instrument(skip(pool))]
pub async fn ensure_users_table(pool: &PgPool) -> anyhow::Result<()> {
    sqlx::query(CREATE_USERS_TABLE)
        .execute(pool)
        .await
        .context("Failed to create users table")?;

    Ok(())
}

/// Ensures the `profiles` relation exists. `users` must already exist.
#[instrument(skip(pool))]
pub async fn ensure_profiles_table(pool: &PgPool) -> anyhow::Result<()> {
    sqlx::query(CREATE_PROFILES_TABLE)
        .execute(pool)
        .await
        .context("Failed to create profiles table")?;

    sqlx::query(CREATE_PROFILES_USER_INDEX)
        .execute(pool)
        .await
        .context("Failed to create profiles user index")?;

    Ok(())
}

/// Creates every table the API needs, in foreign-key order.
pub async fn ensure_schema(pool: &PgPool) -> anyhow::Result<()> {
    ensure_users_table(pool).await?;
    ensure_profiles_table(pool).await?;
    tracing::info!("Schema is up to date");
    Ok(())
}

/// Counts relations named `name` in the current schema.
pub async fn relation_count(pool: &PgPool, name: &str) -> anyhow::Result<i64> {
    let count = sqlx::query_scalar::<_, i64>(
        r#"
        SELECT COUNT(*)
        FROM pg_catalog.pg_class c
        JOIN pg_catalog.pg_namespace n ON n.oid = c.relnamespace
        WHERE c.relname = $1
          AND c.relkind = 'r'
          AND n.nspname = current_schema()
        "#,
    )
    .bind(name)
    .fetch_one(pool)
    .await
    .context("Failed to inspect catalog")?;

    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profiles_ddl_uses_single_column_key() {
        assert!(CREATE_PROFILES_TABLE.contains("pk BIGINT GENERATED BY DEFAULT AS IDENTITY PRIMARY KEY"));
        assert!(!CREATE_PROFILES_TABLE.contains("PRIMARY KEY (pk"));
    }

    #[test]
    fn test_profiles_owner_is_nullable_with_set_null() {
        assert!(CREATE_PROFILES_TABLE.contains("user_uuid UUID,"));
        assert!(CREATE_PROFILES_TABLE.contains("ON UPDATE SET NULL"));
        assert!(CREATE_PROFILES_TABLE.contains("ON DELETE SET NULL"));
    }

    #[test]
    fn test_every_statement_is_idempotent() {
        for ddl in [
            CREATE_USERS_TABLE,
            CREATE_PROFILES_TABLE,
            CREATE_PROFILES_USER_INDEX,
        ] {
            assert!(ddl.contains("IF NOT EXISTS"));
        }
    }
}
