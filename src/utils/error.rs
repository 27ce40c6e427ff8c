//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use thiserror::Error;

/// Errors that can occur while loading the category table
#[derive(Error, Debug)]
pub enum CategoryError {
    #[error("category row {line}: missing mandatory cnf parameter name field")]
    MissingParamName { line: usize },

    #[error("category row {line}: empty variable name")]
    EmptyName { line: usize },
}

/// Errors that can occur during report output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write report: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}

/// Errors that can occur in the password-hash utility
#[derive(Error, Debug)]
pub enum HashError {
    #[error("unsupported authentication plugin '{0}' (allowed: mysql_native_password)")]
    UnsupportedPlugin(String),
}
