//! HTTP routing
//!
//! Adapts the request handler to axum. Every request goes through a single
//! fallback so that method and path dispatch stay with the request handler.

use axum::Router;
use axum::body::Bytes;
use axum::extract::{DefaultBodyLimit, State};
use axum::http::{Method, StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};
use axum::{Json, middleware};
use log::error;
use serde::Serialize;

use crate::error::StoreError;
use crate::error::handlers::store_error_to_status;
use crate::middleware::log_request;
use crate::protocol::{ALLOWED_METHOD, Outcome, OutcomeKind, Request, RequestHandler};
use crate::storage::User;

/// Builds the application router around `handler`.
pub fn create_router(handler: RequestHandler, max_body_bytes: usize) -> Router {
    Router::new()
        .fallback(dispatch)
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(middleware::from_fn(log_request))
        .with_state(handler)
}

async fn dispatch(
    State(handler): State<RequestHandler>,
    method: Method,
    uri: Uri,
    body: Bytes,
) -> Result<Outcome, AppError> {
    let request = Request {
        method: method.as_str().to_string(),
        path: request_target(&uri),
        body: parse_body(&body),
    };

    Ok(handler.handle(request).await?)
}

/// Path plus query string, exactly as the client sent it.
fn request_target(uri: &Uri) -> String {
    uri.path_and_query()
        .map_or_else(|| uri.path().to_string(), |target| target.as_str().to_string())
}

/// Empty or invalid JSON becomes `null`; login and register reject it.
fn parse_body(body: &[u8]) -> serde_json::Value {
    if body.is_empty() {
        return serde_json::Value::Null;
    }
    serde_json::from_slice(body).unwrap_or(serde_json::Value::Null)
}

#[derive(Serialize)]
struct OutcomeBody<'a> {
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    user: Option<&'a User>,
}

impl IntoResponse for Outcome {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if let OutcomeKind::MethodNotAllowed(_) = self.kind {
            return (status, [(header::ALLOW, ALLOWED_METHOD)], self.message).into_response();
        }

        let body = OutcomeBody {
            message: &self.message,
            user: self.user.as_ref(),
        };
        (status, Json(body)).into_response()
    }
}

/// Store failure surfaced to the client as a generic server error.
pub struct AppError(StoreError);

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        Self(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(store_error_to_status(&self.0))
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        error!("Store failure while handling request: {}", self.0);

        let body = OutcomeBody {
            message: "Internal server error",
            user: None,
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_target_keeps_query() {
        let uri: Uri = "/login?x=1".parse().unwrap();
        assert_eq!(request_target(&uri), "/login?x=1");

        let uri: Uri = "/upload".parse().unwrap();
        assert_eq!(request_target(&uri), "/upload");
    }

    #[test]
    fn test_parse_body() {
        assert_eq!(parse_body(b""), serde_json::Value::Null);
        assert_eq!(parse_body(b"{oops"), serde_json::Value::Null);
        assert_eq!(parse_body(br#"{"pic":"x"}"#)["pic"], "x");
    }

    #[test]
    fn test_method_not_allowed_sets_allow_header() {
        let response = Outcome::new(OutcomeKind::MethodNotAllowed("PUT".into())).into_response();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(response.headers()[header::ALLOW], "POST");
    }

    #[test]
    fn test_store_failure_is_server_error() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "disk gone");
        let response = AppError::from(StoreError::Io(io)).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let response =
            AppError::from(StoreError::DuplicateEmail("a@b.c".into())).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
