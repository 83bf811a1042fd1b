//! # Portico Core
//!
//! Foundational types shared by every Portico crate:
//!
//! - [`errors`]: [`AppError`], the application error with HTTP response conversion
//! - [`responder`]: fixed plain-text pages for `404` and `403`
//!
//! # Example
//!
//! ```ignore
//! use axum::http::StatusCode;
//! use portico_core::{AppError, status_page};
//!
//! let error = AppError::not_found(anyhow::anyhow!("User not found"));
//! let forbidden = status_page(StatusCode::FORBIDDEN);
//! ```

pub mod errors;
pub mod responder;

// Re-export commonly used types at crate root
pub use errors::AppError;
pub use responder::{FORBIDDEN_BODY, NOT_FOUND_BODY, not_found, status_page};
