use axum::{
    extract::{FromRequestParts, Request, State},
    http::{HeaderMap, HeaderValue, StatusCode, header, request::Parts},
    middleware::Next,
    response::Response,
};
use tracing::debug;

use portico_auth::{AuthError, authenticate_header};
use portico_config::JwtConfig;
use portico_core::{AppError, status_page};
use portico_db::UserStore;
use portico_models::User;

use crate::state::AppState;

/// The user resolved by [`login_only`] for the current request.
///
/// Stored in the request extensions, so it lives exactly as long as the
/// request and is never shared with another one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentUser(pub User);

impl CurrentUser {
    /// Returns the attached user, if a login gate ran upstream.
    pub fn lookup<B>(request: &axum::http::Request<B>) -> Option<&User> {
        request
            .extensions()
            .get::<CurrentUser>()
            .map(|current| &current.0)
    }
}

/// Extracts the attached user in handlers.
///
/// Handlers behind [`login_only`] always find one. A handler mounted without
/// the gate gets the `403` page rather than running unauthenticated.
impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<CurrentUser>()
            .cloned()
            .ok_or_else(|| status_page(StatusCode::FORBIDDEN))
    }
}

/// Resolves the `Authorization` header to a live user.
///
/// # Errors
///
/// - `401` when the header is missing, malformed or carries a bad token
/// - whatever the store returns when the lookup fails (`404` on a miss)
pub async fn authenticate(
    users: &dyn UserStore,
    jwt_config: &JwtConfig,
    headers: &HeaderMap,
) -> Result<User, AppError> {
    let header = headers
        .get(header::AUTHORIZATION)
        .map(|value| value.to_str().map_err(|_| AuthError::MalformedHeader))
        .transpose()
        .map_err(AuthError::into_app_error)?;

    let user_id = authenticate_header(header, jwt_config).map_err(AuthError::into_app_error)?;

    users.find_user_by_id(user_id).await
}

/// Login gate.
///
/// Attaches [`CurrentUser`] and calls `next` when the bearer token resolves
/// to a user. Otherwise responds `403` without calling `next`.
///
/// Every response from a logged-in request is JSON by default: the gate
/// gives the response `Content-Type: application/json` unless the inner
/// handler already chose a content type. A handler that names its own type
/// (a `String` body is `text/plain`) keeps it, so the gate supplies the
/// default and the handler may override it.
///
/// # Usage with axum::middleware::from_fn_with_state
///
/// ```rust,ignore
/// use axum::{Router, middleware, routing::get};
/// use crate::middleware::auth::login_only;
///
/// let routes = Router::new()
///     .route("/me", get(me))
///     .route_layer(middleware::from_fn_with_state(state.clone(), login_only));
/// ```
pub async fn login_only(State(state): State<AppState>, mut request: Request, next: Next) -> Response {
    let user = match authenticate(state.users.as_ref(), &state.jwt_config, request.headers()).await
    {
        Ok(user) => user,
        Err(err) => {
            debug!(status = %err.status, error = %err.error, "Login gate rejected request");
            return status_page(StatusCode::FORBIDDEN);
        }
    };

    debug!(user = %user.uuid, "Login gate accepted request");
    request.extensions_mut().insert(CurrentUser(user));

    let mut response = next.run(request).await;
    response
        .headers_mut()
        .entry(header::CONTENT_TYPE)
        .or_insert(HeaderValue::from_static("application/json"));
    response
}
