//! Profile records.
//!
//! A profile points at its owner through `user_uuid`. Deleting or re-keying
//! the owner sets that column to `NULL`, so readers must accept orphaned
//! profiles.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// A profile row from the `profiles` table.
#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct Profile {
    pub pk: i64,
    pub uuid: Uuid,
    /// `None` once the owning user has been deleted.
    pub user_uuid: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Profile {
    pub fn is_orphaned(&self) -> bool {
        self.user_uuid.is_none()
    }

    pub fn is_owned_by(&self, user_uuid: Uuid) -> bool {
        self.user_uuid == Some(user_uuid)
    }
}
