//! # Portico Models
//!
//! Row types and DTOs shared by the database layer, the HTTP layer and the CLI.
//!
//! - [`users`]: [`User`] and [`CreateUserDto`]
//! - [`profiles`]: [`Profile`]

pub mod profiles;
pub mod users;

pub use profiles::Profile;
pub use users::{CreateUserDto, User};
