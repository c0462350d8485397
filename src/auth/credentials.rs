//! Credential matching
//!
//! Checks a submitted password against a stored account. Passwords are stored
//! and compared verbatim; there is no hashing.

use crate::auth::results::LoginResult;
use crate::storage::User;

/// Matches `password` against the account found for a login attempt.
pub fn match_credentials(user: Option<User>, password: &str) -> LoginResult {
    match user {
        Some(user) if user.password == password => LoginResult::Authenticated(user),
        Some(_) => LoginResult::PasswordMismatch,
        None => LoginResult::UserNotFound,
    }
}
