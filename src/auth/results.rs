//! Authentication result types
//!
//! Defines result structures returned by account operations.

use crate::error::ValidationError;
use crate::storage::User;

/// Result of a login attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginResult {
    Authenticated(User),
    PasswordMismatch,
    UserNotFound,
}

/// Result of a registration attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegisterResult {
    Registered(User),
    AlreadyExists,
    Rejected(ValidationError),
}
