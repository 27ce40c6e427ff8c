//! Command implementations for the CLI.

pub mod compare;
pub mod hash;
pub mod models;

pub use compare::execute_compare;
pub use hash::{hash_password, NATIVE_PASSWORD_PLUGIN};
pub use models::CompareArgs;
