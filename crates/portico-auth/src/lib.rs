//! # Portico Auth
//!
//! Turns an `Authorization` header into a user identifier.
//!
//! - [`bearer`]: strips the `Bearer ` prefix with explicit length checks
//! - [`claims`]: the JWT claim set
//! - [`jwt`]: token issuance and decoding
//! - [`error`]: [`AuthError`], the reasons a header can be rejected
//!
//! The HTTP gates collapse every [`AuthError`] into the same `403` page, so
//! the variants exist for logs and tests only.
//!
//! # Example
//!
//! ```ignore
//! use portico_auth::{authenticate_header, create_access_token};
//! use portico_config::JwtConfig;
//!
//! let config = JwtConfig::from_env();
//! let token = create_access_token(user_id, &config)?;
//!
//! let header = format!("Bearer {token}");
//! let user_id = authenticate_header(Some(&header), &config)?;
//! ```

pub mod bearer;
pub mod claims;
pub mod error;
pub mod jwt;

// Re-export commonly used types at crate root
pub use bearer::{BEARER_PREFIX, authenticate_header, parse_bearer};
pub use claims::Claims;
pub use error::AuthError;
pub use jwt::{create_access_token, decode_user_id};
