//! Account protocol implementation
//!
//! Handles route dispatch, request bodies, operation handling and outcomes.

pub mod commands;
pub mod handlers;
pub mod responses;

pub use commands::{ALLOWED_METHOD, Request, Route, parse_route};
pub use handlers::RequestHandler;
pub use responses::{Outcome, OutcomeKind};
