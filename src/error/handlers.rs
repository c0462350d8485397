//! Error handlers
//!
//! Provides error logging and status mapping.

use crate::error::types::{ServerError, StoreError};
use log::error;

/// Handle an account server error
pub fn handle_error(err: &ServerError) {
    error!("Account Server Error: {}", err);
}

/// Convert a store failure that escaped the request handler to an HTTP status code
///
/// Registration turns `DuplicateEmail` into a 409 outcome itself, so anything
/// reaching this point is a server fault.
pub fn store_error_to_status(err: &StoreError) -> u16 {
    match err {
        StoreError::DuplicateEmail(_)
        | StoreError::Io(_)
        | StoreError::Serialization(_)
        | StoreError::UnsupportedUri(_) => 500,
    }
}
