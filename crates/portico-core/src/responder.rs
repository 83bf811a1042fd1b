//! Fixed status pages.
//!
//! The gates never explain why a request was refused. A refused request gets
//! one of two literal plain-text bodies, and every other status goes out with
//! an empty body.

use axum::{
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

pub const NOT_FOUND_BODY: &str = "404 - Page not found";
pub const FORBIDDEN_BODY: &str = "403 - Forbidden";

/// Writes `status` with the fixed body for `404` and `403`, and no body for
/// anything else.
pub fn status_page(status: StatusCode) -> Response {
    let body = match status {
        StatusCode::NOT_FOUND => NOT_FOUND_BODY,
        StatusCode::FORBIDDEN => FORBIDDEN_BODY,
        _ => return status.into_response(),
    };

    (
        status,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        body,
    )
        .into_response()
}

/// Router fallback for unmatched paths.
pub async fn not_found() -> Response {
    status_page(StatusCode::NOT_FOUND)
}
