//! Operation outcomes
//!
//! Defines the structured result of every request, independent of how the
//! transport encodes it, along with its status code and message.

use crate::auth::{LoginResult, RegisterResult};
use crate::error::ValidationError;
use crate::storage::User;

pub const OK: u16 = 200;
pub const CREATED: u16 = 201;
pub const BAD_REQUEST: u16 = 400;
pub const UNAUTHORIZED: u16 = 401;
pub const NOT_FOUND: u16 = 404;
pub const METHOD_NOT_ALLOWED: u16 = 405;
pub const CONFLICT: u16 = 409;

/// The kind of result an operation produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutcomeKind {
    LoginSuccess,
    RegisterSuccess,
    UploadSuccess,
    UserNotFound,
    PasswordMismatch,
    UserAlreadyExists,
    InvalidEmail,
    NameContainsDigit,
    WeakPassword,
    MalformedRequest,
    /// Carries the rejected method for the response text.
    MethodNotAllowed(String),
}

impl OutcomeKind {
    pub fn status_code(&self) -> u16 {
        match self {
            OutcomeKind::LoginSuccess | OutcomeKind::UploadSuccess => OK,
            OutcomeKind::RegisterSuccess => CREATED,
            OutcomeKind::UserNotFound => NOT_FOUND,
            OutcomeKind::PasswordMismatch => UNAUTHORIZED,
            OutcomeKind::UserAlreadyExists => CONFLICT,
            OutcomeKind::InvalidEmail
            | OutcomeKind::NameContainsDigit
            | OutcomeKind::WeakPassword
            | OutcomeKind::MalformedRequest => BAD_REQUEST,
            OutcomeKind::MethodNotAllowed(_) => METHOD_NOT_ALLOWED,
        }
    }

    pub fn message(&self) -> String {
        match self {
            OutcomeKind::LoginSuccess => "Login Successfully".into(),
            OutcomeKind::RegisterSuccess => "Successfully Registered, Please login now.".into(),
            OutcomeKind::UploadSuccess => "Uploaded".into(),
            OutcomeKind::UserNotFound => "User not registered".into(),
            OutcomeKind::PasswordMismatch => "Password didn't match".into(),
            OutcomeKind::UserAlreadyExists => "User already registered".into(),
            OutcomeKind::InvalidEmail => ValidationError::InvalidEmail.to_string(),
            OutcomeKind::NameContainsDigit => ValidationError::NameContainsDigit.to_string(),
            OutcomeKind::WeakPassword => ValidationError::WeakPassword.to_string(),
            OutcomeKind::MalformedRequest => "Malformed request body".into(),
            OutcomeKind::MethodNotAllowed(method) => format!("Method {} Not Allowed", method),
        }
    }
}

impl From<ValidationError> for OutcomeKind {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::InvalidEmail => OutcomeKind::InvalidEmail,
            ValidationError::NameContainsDigit => OutcomeKind::NameContainsDigit,
            ValidationError::WeakPassword => OutcomeKind::WeakPassword,
        }
    }
}

/// Result of a request: kind, message and, for a successful login, the
/// stored account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub kind: OutcomeKind,
    pub message: String,
    pub user: Option<User>,
}

impl Outcome {
    pub fn new(kind: OutcomeKind) -> Self {
        let message = kind.message();
        Self {
            kind,
            message,
            user: None,
        }
    }

    pub fn with_user(mut self, user: User) -> Self {
        self.user = Some(user);
        self
    }

    pub fn status_code(&self) -> u16 {
        self.kind.status_code()
    }
}

impl From<LoginResult> for Outcome {
    fn from(result: LoginResult) -> Self {
        match result {
            // The full stored record is returned, password included.
            LoginResult::Authenticated(user) => {
                Outcome::new(OutcomeKind::LoginSuccess).with_user(user)
            }
            LoginResult::PasswordMismatch => Outcome::new(OutcomeKind::PasswordMismatch),
            LoginResult::UserNotFound => Outcome::new(OutcomeKind::UserNotFound),
        }
    }
}

impl From<RegisterResult> for Outcome {
    fn from(result: RegisterResult) -> Self {
        match result {
            RegisterResult::Registered(_) => Outcome::new(OutcomeKind::RegisterSuccess),
            RegisterResult::AlreadyExists => Outcome::new(OutcomeKind::UserAlreadyExists),
            RegisterResult::Rejected(reason) => Outcome::new(reason.into()),
        }
    }
}
