//! Request handler for the account server.
//!
//! Dispatches a parsed request to the login, register or upload operation
//! and turns the result into an [`Outcome`]. Store failures are not
//! recovered here; they propagate to the transport as `Err`.

use log::{info, warn};
use serde::de::DeserializeOwned;

use crate::auth;
use crate::error::StoreError;
use crate::protocol::commands::{
    LoginRequest, RegisterRequest, Request, Route, UploadRequest, parse_route,
};
use crate::protocol::responses::{Outcome, OutcomeKind};
use crate::storage::Stores;

/// Orchestrates the account operations against the document store.
#[derive(Clone)]
pub struct RequestHandler {
    stores: Stores,
}

impl RequestHandler {
    pub fn new(stores: Stores) -> Self {
        Self { stores }
    }

    /// Dispatches a request to its operation.
    ///
    /// # Returns
    ///
    /// * `Ok(Outcome)` - The operation ran to completion, successfully or not.
    /// * `Err(StoreError)` - The document store failed.
    pub async fn handle(&self, request: Request) -> Result<Outcome, StoreError> {
        let Some(route) = parse_route(&request.method, &request.path) else {
            warn!("Rejected {} {}", request.method, request.path);
            return Ok(Outcome::new(OutcomeKind::MethodNotAllowed(request.method)));
        };

        match route {
            Route::Login => match decode::<LoginRequest>(request.body) {
                Some(body) => self.login(&body.email, &body.password).await,
                None => Ok(Outcome::new(OutcomeKind::MalformedRequest)),
            },
            Route::Register => match decode::<RegisterRequest>(request.body) {
                Some(body) => {
                    self.register(&body.name, &body.email, &body.password)
                        .await
                }
                None => Ok(Outcome::new(OutcomeKind::MalformedRequest)),
            },
            Route::Upload => self.upload(UploadRequest::from_body(&request.body).pic).await,
        }
    }

    /// Handles login: 404 for an unknown email, 401 for a wrong password.
    pub async fn login(&self, email: &str, password: &str) -> Result<Outcome, StoreError> {
        let result = auth::login(self.stores.accounts.as_ref(), email, password).await?;
        Ok(Outcome::from(result))
    }

    /// Handles registration: 409 for a taken email, 400 for invalid fields.
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<Outcome, StoreError> {
        let result = auth::register(self.stores.accounts.as_ref(), name, email, password).await?;
        Ok(Outcome::from(result))
    }

    /// Handles upload: the picture reference is stored as-is.
    pub async fn upload(&self, pic: String) -> Result<Outcome, StoreError> {
        let record = self.stores.media.save_image_record(pic).await?;
        info!("Stored image record {}", record.id);
        Ok(Outcome::new(OutcomeKind::UploadSuccess))
    }
}

fn decode<T: DeserializeOwned>(body: serde_json::Value) -> Option<T> {
    match serde_json::from_value(body) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!("Malformed request body: {}", e);
            None
        }
    }
}
