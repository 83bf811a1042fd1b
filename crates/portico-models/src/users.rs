//! User records.
//!
//! Users are created by the CLI and read by the login gate on every
//! authenticated request. The HTTP layer never mutates them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// A user row from the `users` table.
#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct User {
    pub pk: i64,
    pub uuid: Uuid,
    pub email: String,
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl User {
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}

/// DTO for creating a new user.
#[derive(Deserialize, Debug, Clone, Validate, ToSchema)]
pub struct CreateUserDto {
    #[validate(email)]
    pub email: String,
    #[serde(default)]
    pub is_admin: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User {
            pk: 42,
            uuid: Uuid::new_v4(),
            email: "ada@example.com".to_string(),
            is_admin: false,
            created_at: Utc::now(),
            updated_at: None,
            deleted_at: None,
        }
    }

    #[test]
    fn test_user_serializes_admin_flag() {
        let json = serde_json::to_value(sample_user()).unwrap();
        assert_eq!(json["is_admin"], false);
        assert_eq!(json["pk"], 42);
        assert!(json["deleted_at"].is_null());
    }

    #[test]
    fn test_is_deleted() {
        let mut user = sample_user();
        assert!(!user.is_deleted());
        user.deleted_at = Some(Utc::now());
        assert!(user.is_deleted());
    }

    #[test]
    fn test_create_user_dto_validation() {
        let valid = CreateUserDto {
            email: "ada@example.com".to_string(),
            is_admin: true,
        };
        assert!(valid.validate().is_ok());

        let invalid = CreateUserDto {
            email: "not-an-email".to_string(),
            is_admin: false,
        };
        assert!(invalid.validate().is_err());
    }

    #[test]
    fn test_create_user_dto_admin_defaults_to_false() {
        let dto: CreateUserDto = serde_json::from_str(r#"{"email":"a@b.io"}"#).unwrap();
        assert!(!dto.is_admin);
    }
}
