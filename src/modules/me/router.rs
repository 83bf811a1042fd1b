use axum::{
    Router,
    http::Method,
    middleware::from_fn_with_state,
    routing::any,
};

use crate::middleware::{auth::login_only, chain::Chain, method::require_method};
use crate::modules::me::controller::get_me;
use crate::state::AppState;

pub fn init_me_router(state: &AppState) -> Router<AppState> {
    let me = Chain::<AppState>::new()
        .with(from_fn_with_state(Method::GET, require_method))
        .with(from_fn_with_state(state.clone(), login_only));

    Router::new().route("/", me.wrap(any(get_me)))
}
