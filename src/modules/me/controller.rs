use axum::Json;
use portico_models::User;
use tracing::instrument;

use crate::middleware::auth::CurrentUser;

/// Get the authenticated user
#[utoipa::path(
    get,
    path = "/api/me",
    responses(
        (status = 200, description = "The user the bearer token belongs to", body = User),
        (status = 400, description = "Method other than GET"),
        (status = 403, description = "Missing, invalid or unknown token")
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Users"
)]
#[instrument]
pub async fn get_me(CurrentUser(user): CurrentUser) -> Json<User> {
    Json(user)
}
