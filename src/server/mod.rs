//! Server core functionality
//!
//! This module contains the HTTP adaptation of the request handler and the
//! listener lifecycle.

pub mod core;
pub mod routes;

pub use self::core::Server;
pub use routes::create_router;
