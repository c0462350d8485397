//! Error types
//!
//! Defines domain-specific error types for each module of the account server.

use std::io;

use thiserror::Error;

/// Validation engine errors
///
/// The `Display` text of each variant is the message returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Invalid email")]
    InvalidEmail,
    #[error("Name should not contain digits")]
    NameContainsDigit,
    #[error(
        "Password must be 8-12 characters long, contain at least one digit, one lowercase letter, one capital letter, and one special character."
    )]
    WeakPassword,
}

/// Document store errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("A user with email {0} already exists")]
    DuplicateEmail(String),
    #[error("Unsupported store URI: {0}")]
    UnsupportedUri(String),
}

/// General server error raised during startup and shutdown
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
