//! Admin authorization.
//!
//! [`admin_only`] performs no authentication of its own. It only reads the
//! [`CurrentUser`] a login gate attached upstream.
//!
//! # Permissive default
//!
//! A request that reaches [`admin_only`] with no attached user is let
//! through. Mounting the gate without a login gate in front of it therefore
//! grants access to anyone. Every route in this crate puts
//! [`login_only`](super::auth::login_only) first. The pass-through is logged
//! at `warn` so a miswired route shows up in the logs.

use axum::{extract::Request, http::StatusCode, middleware::Next, response::Response};
use tracing::{debug, warn};

use portico_core::{AppError, status_page};
use portico_models::User;

use crate::middleware::auth::CurrentUser;

/// Admin gate.
///
/// - attached user with `is_admin == false`: `403`, `next` is not called
/// - attached admin: `next`
/// - no attached user: `next` (see the module docs)
///
/// # Usage with axum::middleware::from_fn
///
/// ```rust,ignore
/// use axum::{Router, middleware};
/// use crate::middleware::{auth::login_only, role::admin_only};
///
/// let admin_routes = Router::new()
///     .route("/profiles", get(list_profiles))
///     .route_layer(middleware::from_fn(admin_only))
///     .route_layer(middleware::from_fn_with_state(state.clone(), login_only));
/// ```
pub async fn admin_only(request: Request, next: Next) -> Response {
    match CurrentUser::lookup(&request) {
        Some(user) if !user.is_admin => {
            debug!(user = %user.uuid, "Admin gate rejected non-admin");
            return status_page(StatusCode::FORBIDDEN);
        }
        Some(_) => {}
        None => {
            warn!(
                path = %request.uri().path(),
                "Admin gate reached without an authenticated user; passing through"
            );
        }
    }

    next.run(request).await
}

/// Handler-side check for actions an owner may take on their own records and
/// an admin may take on anyone's.
pub fn check_owner_or_admin(user: &User, owner: Option<uuid::Uuid>) -> Result<(), AppError> {
    if user.is_admin || owner == Some(user.uuid) {
        return Ok(());
    }

    Err(AppError::forbidden(
        "Access denied. Only the owner or an administrator may do this.",
    ))
}
