use axum::{
    Router,
    http::Method,
    middleware::{from_fn, from_fn_with_state},
    routing::any,
};

use crate::middleware::{
    auth::login_only, chain::Chain, method::require_method, role::admin_only,
};
use crate::modules::profiles::controller::{
    create_profile, delete_profile, list_my_profiles, list_profiles,
};
use crate::state::AppState;

/// Every route takes the method gate first, then the login gate. The method
/// check therefore answers `400` before any token is looked at.
pub fn init_profiles_router(state: &AppState) -> Router<AppState> {
    let logged_in = |method: Method| {
        Chain::<AppState>::new()
            .with(from_fn_with_state(method, require_method))
            .with(from_fn_with_state(state.clone(), login_only))
    };

    Router::new()
        .route(
            "/",
            logged_in(Method::GET)
                .with(from_fn(admin_only))
                .wrap(any(list_profiles)),
        )
        .route("/mine", logged_in(Method::GET).wrap(any(list_my_profiles)))
        .route("/new", logged_in(Method::POST).wrap(any(create_profile)))
        .route(
            "/{profile_id}",
            logged_in(Method::DELETE).wrap(any(delete_profile)),
        )
}
