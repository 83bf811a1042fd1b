//! Database round trips against a real PostgreSQL.
//!
//! These need `DATABASE_URL` pointing at a server where the test user may
//! create databases.

use portico_db::profiles::{
    create_profile, get_profile, list_profiles, list_profiles_for_user, soft_delete_profile,
};
use portico_db::schema::{ensure_profiles_table, ensure_schema, relation_count};
use portico_db::users::create_user;
use portico_db::{PgUserStore, UserStore};
use portico_models::CreateUserDto;
use sqlx::PgPool;
use uuid::Uuid;

fn unique_email() -> String {
    format!("test-{}@test.com", Uuid::new_v4())
}

async fn seeded_user(pool: &PgPool, is_admin: bool) -> portico_models::User {
    create_user(
        pool,
        CreateUserDto {
            email: unique_email(),
            is_admin,
        },
    )
    .await
    .unwrap()
}

#[sqlx::test]
async fn test_ensure_schema_is_idempotent(pool: PgPool) {
    ensure_schema(&pool).await.unwrap();
    ensure_schema(&pool).await.unwrap();
    ensure_profiles_table(&pool).await.unwrap();

    assert_eq!(relation_count(&pool, "users").await.unwrap(), 1);
    assert_eq!(relation_count(&pool, "profiles").await.unwrap(), 1);
}

#[sqlx::test]
async fn test_find_user_by_id(pool: PgPool) {
    ensure_schema(&pool).await.unwrap();
    let user = seeded_user(&pool, true).await;

    let store = PgUserStore::new(pool.clone());
    let found = store.find_user_by_id(user.uuid).await.unwrap();
    assert_eq!(found, user);
    assert!(found.is_admin);
}

#[sqlx::test]
async fn test_find_missing_user_is_not_found(pool: PgPool) {
    ensure_schema(&pool).await.unwrap();

    let store = PgUserStore::new(pool.clone());
    let err = store.find_user_by_id(Uuid::new_v4()).await.unwrap_err();
    assert!(err.is_not_found());
}

#[sqlx::test]
async fn test_soft_deleted_user_is_not_found(pool: PgPool) {
    ensure_schema(&pool).await.unwrap();
    let user = seeded_user(&pool, false).await;

    sqlx::query("UPDATE users SET deleted_at = CURRENT_TIMESTAMP WHERE uuid = $1")
        .bind(user.uuid)
        .execute(&pool)
        .await
        .unwrap();

    let store = PgUserStore::new(pool.clone());
    assert!(store.find_user_by_id(user.uuid).await.unwrap_err().is_not_found());
}

#[sqlx::test]
async fn test_duplicate_email_is_rejected(pool: PgPool) {
    ensure_schema(&pool).await.unwrap();
    let email = unique_email();
    let dto = CreateUserDto {
        email: email.clone(),
        is_admin: false,
    };

    create_user(&pool, dto.clone()).await.unwrap();
    let err = create_user(&pool, dto).await.unwrap_err();
    assert_eq!(err.status.as_u16(), 422);
}

#[sqlx::test]
async fn test_profile_requires_existing_owner(pool: PgPool) {
    ensure_schema(&pool).await.unwrap();

    let err = create_profile(&pool, Uuid::new_v4()).await.unwrap_err();
    assert_eq!(err.status.as_u16(), 422);
}

#[sqlx::test]
async fn test_profiles_are_listed_per_user(pool: PgPool) {
    ensure_schema(&pool).await.unwrap();
    let alice = seeded_user(&pool, false).await;
    let bob = seeded_user(&pool, false).await;

    let first = create_profile(&pool, alice.uuid).await.unwrap();
    let second = create_profile(&pool, alice.uuid).await.unwrap();
    create_profile(&pool, bob.uuid).await.unwrap();

    let mine = list_profiles_for_user(&pool, alice.uuid).await.unwrap();
    assert_eq!(mine, vec![first.clone(), second]);
    assert!(mine.iter().all(|p| p.is_owned_by(alice.uuid)));

    assert_eq!(list_profiles(&pool).await.unwrap().len(), 3);
}

#[sqlx::test]
async fn test_deleting_user_orphans_profiles(pool: PgPool) {
    ensure_schema(&pool).await.unwrap();
    let user = seeded_user(&pool, false).await;
    let profile = create_profile(&pool, user.uuid).await.unwrap();

    sqlx::query("DELETE FROM users WHERE uuid = $1")
        .bind(user.uuid)
        .execute(&pool)
        .await
        .unwrap();

    let orphan = get_profile(&pool, profile.uuid).await.unwrap();
    assert_eq!(orphan.user_uuid, None);
    assert!(orphan.is_orphaned());
    assert!(list_profiles(&pool).await.unwrap().contains(&orphan));
    assert!(list_profiles_for_user(&pool, user.uuid).await.unwrap().is_empty());
}

#[sqlx::test]
async fn test_soft_delete_hides_profile(pool: PgPool) {
    ensure_schema(&pool).await.unwrap();
    let user = seeded_user(&pool, false).await;
    let profile = create_profile(&pool, user.uuid).await.unwrap();

    let deleted = soft_delete_profile(&pool, profile.uuid).await.unwrap();
    assert!(deleted.deleted_at.is_some());
    assert!(deleted.updated_at.is_some());

    assert!(get_profile(&pool, profile.uuid).await.unwrap_err().is_not_found());
    assert!(list_profiles(&pool).await.unwrap().is_empty());
    assert!(
        soft_delete_profile(&pool, profile.uuid)
            .await
            .unwrap_err()
            .is_not_found()
    );
}

