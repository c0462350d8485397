//! Account authentication and registration
//!
//! Handles credential matching, registration input validation, and the
//! login and register operations against the account store.

pub mod credentials;
pub mod operations;
pub mod results;
pub mod validator;

pub use credentials::match_credentials;
pub use operations::{login, register};
pub use results::{LoginResult, RegisterResult};
pub use validator::{validate_email, validate_name, validate_password, validate_registration};
