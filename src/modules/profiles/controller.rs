use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use portico_core::AppError;
use portico_db::profiles;
use portico_models::Profile;
use tracing::instrument;
use uuid::Uuid;

use crate::middleware::auth::CurrentUser;
use crate::middleware::role::check_owner_or_admin;
use crate::state::AppState;

/// List every profile (admin only)
///
/// Orphaned profiles, whose owner was deleted, are included with a null
/// `user_uuid`.
#[utoipa::path(
    get,
    path = "/api/profiles",
    responses(
        (status = 200, description = "All live profiles", body = Vec<Profile>),
        (status = 400, description = "Method other than GET"),
        (status = 403, description = "Not authenticated or not an administrator")
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Profiles"
)]
#[instrument(skip(state))]
pub async fn list_profiles(State(state): State<AppState>) -> Result<Json<Vec<Profile>>, AppError> {
    let profiles = profiles::list_profiles(&state.db).await?;
    Ok(Json(profiles))
}

/// List the authenticated user's profiles
#[utoipa::path(
    get,
    path = "/api/profiles/mine",
    responses(
        (status = 200, description = "Profiles owned by the caller", body = Vec<Profile>),
        (status = 400, description = "Method other than GET"),
        (status = 403, description = "Not authenticated")
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Profiles"
)]
#[instrument(skip(state))]
pub async fn list_my_profiles(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<Json<Vec<Profile>>, AppError> {
    let profiles = profiles::list_profiles_for_user(&state.db, user.uuid).await?;
    Ok(Json(profiles))
}

/// Create a profile owned by the authenticated user
#[utoipa::path(
    post,
    path = "/api/profiles/new",
    responses(
        (status = 201, description = "Profile created", body = Profile),
        (status = 400, description = "Method other than POST"),
        (status = 403, description = "Not authenticated")
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Profiles"
)]
#[instrument(skip(state))]
pub async fn create_profile(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<(StatusCode, Json<Profile>), AppError> {
    let profile = profiles::create_profile(&state.db, user.uuid).await?;
    Ok((StatusCode::CREATED, Json(profile)))
}

/// Soft-delete a profile (owner or admin)
#[utoipa::path(
    delete,
    path = "/api/profiles/{profile_id}",
    params(
        ("profile_id" = Uuid, Path, description = "Profile UUID")
    ),
    responses(
        (status = 200, description = "Profile deleted", body = Profile),
        (status = 400, description = "Method other than DELETE"),
        (status = 403, description = "Not authenticated, or neither owner nor administrator"),
        (status = 404, description = "No live profile with this id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Profiles"
)]
#[instrument(skip(state))]
pub async fn delete_profile(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(profile_id): Path<Uuid>,
) -> Result<Json<Profile>, AppError> {
    let profile = profiles::get_profile(&state.db, profile_id).await?;
    check_owner_or_admin(&user, profile.user_uuid)?;

    let deleted = profiles::soft_delete_profile(&state.db, profile_id).await?;
    Ok(Json(deleted))
}
