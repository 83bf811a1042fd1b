use axum::{
    extract::{Request, State},
    http::{Method, StatusCode, header},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::debug;

/// Method gate.
///
/// Passes the request through untouched when its verb equals the expected
/// one, and answers `400 Bad Request` otherwise. Mount it on an `any` route,
/// since axum's own method routing would answer `405` before the gate runs.
///
/// ```rust,ignore
/// use axum::{http::Method, middleware::from_fn_with_state, routing::any};
///
/// let route = any(handler).layer(from_fn_with_state(Method::GET, require_method));
/// ```
pub async fn require_method(
    State(expected): State<Method>,
    request: Request,
    next: Next,
) -> Response {
    if *request.method() != expected {
        debug!(expected = %expected, got = %request.method(), "Method gate rejected request");
        return method_mismatch();
    }

    next.run(request).await
}

fn method_mismatch() -> Response {
    let status = StatusCode::BAD_REQUEST;
    (
        status,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        status.canonical_reason().unwrap_or_default(),
    )
        .into_response()
}
