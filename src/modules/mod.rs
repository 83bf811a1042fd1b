pub mod me;
pub mod profiles;
