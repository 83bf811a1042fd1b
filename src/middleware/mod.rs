//! Request gates and their composition.
//!
//! Each gate is a plain axum middleware function that either short-circuits
//! with a response or hands the (possibly extended) request to `next`:
//!
//! - [`method`]: rejects requests whose verb differs from the expected one (`400`)
//! - [`auth`]: resolves the bearer token to a [`User`](portico_models::User),
//!   attaches it as [`CurrentUser`](auth::CurrentUser), or rejects (`403`)
//! - [`role`]: rejects an attached user whose admin flag is false (`403`)
//! - [`chain`]: stacks gates around a handler, first gate outermost
//!
//! # Example
//!
//! ```ignore
//! use axum::{http::Method, middleware::{from_fn, from_fn_with_state}, routing::any};
//! use crate::middleware::{auth::login_only, chain::Chain, method::require_method, role::admin_only};
//!
//! let list_all = Chain::new()
//!     .with(from_fn_with_state(Method::GET, require_method))
//!     .with(from_fn_with_state(state.clone(), login_only))
//!     .with(from_fn(admin_only))
//!     .wrap(any(list_profiles));
//! ```
//!
//! # Failure responses
//!
//! Every authentication and authorization failure produces the same
//! `403 - Forbidden` page, whichever check failed. The reason is only
//! logged at `debug` level.

pub mod auth;
pub mod chain;
pub mod method;
pub mod role;
