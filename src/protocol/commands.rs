//! Module `commands`
//!
//! Defines the operations the account server accepts and the dispatch rule
//! that maps a request's method and path onto one of them.

use serde::Deserialize;

/// The only method the account server accepts.
pub const ALLOWED_METHOD: &str = "POST";

/// Represents an operation addressed by a request path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,    // POST /login
    Register, // POST /register
    Upload,   // POST /upload
}

/// A request as handed over by the transport layer.
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    pub method: String,
    pub path: String,
    pub body: serde_json::Value,
}

/// Body of a login request.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Body of a registration request.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Body of an upload request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadRequest {
    pub pic: String,
}

impl UploadRequest {
    /// Reads `pic` from any body; upload never rejects its input.
    ///
    /// A missing or `null` field (or a body that is not an object) yields an
    /// empty name, scalars are stored in their string form and nested values
    /// as their JSON text.
    pub fn from_body(body: &serde_json::Value) -> Self {
        let pic = match body.get("pic") {
            None | Some(serde_json::Value::Null) => String::new(),
            Some(serde_json::Value::String(pic)) => pic.clone(),
            Some(other) => other.to_string(),
        };
        Self { pic }
    }
}

/// Parses the method and request target into a [`Route`].
///
/// The target is compared verbatim, query string included. Returns `None`
/// for any method other than POST, and for POST to an unknown target. Both
/// cases are answered with 405.
pub fn parse_route(method: &str, path: &str) -> Option<Route> {
    if method != ALLOWED_METHOD {
        return None;
    }

    match path {
        "/login" => Some(Route::Login),
        "/register" => Some(Route::Register),
        "/upload" => Some(Route::Upload),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_known_routes() {
        assert_eq!(parse_route("POST", "/login"), Some(Route::Login));
        assert_eq!(parse_route("POST", "/register"), Some(Route::Register));
        assert_eq!(parse_route("POST", "/upload"), Some(Route::Upload));
    }

    #[test]
    fn test_non_post_methods_are_rejected() {
        for method in ["GET", "PUT", "DELETE", "PATCH", "OPTIONS", "HEAD", "post"] {
            assert_eq!(parse_route(method, "/login"), None);
            assert_eq!(parse_route(method, "/nowhere"), None);
        }
    }

    #[test]
    fn test_upload_body_is_read_leniently() {
        assert_eq!(UploadRequest::from_body(&json!({"pic": "imgdata"})).pic, "imgdata");
        assert_eq!(UploadRequest::from_body(&json!({"pic": 123})).pic, "123");
        assert_eq!(UploadRequest::from_body(&json!({"pic": true})).pic, "true");
        assert_eq!(UploadRequest::from_body(&json!({"pic": null})).pic, "");
        assert_eq!(UploadRequest::from_body(&json!({})).pic, "");
        assert_eq!(UploadRequest::from_body(&serde_json::Value::Null).pic, "");
        assert_eq!(UploadRequest::from_body(&json!(["pic"])).pic, "");
        assert_eq!(
            UploadRequest::from_body(&json!({"pic": {"a": 1}})).pic,
            r#"{"a":1}"#
        );
    }

    #[test]
    fn test_query_string_is_part_of_the_path() {
        assert_eq!(parse_route("POST", "/login?x=1"), None);
        assert_eq!(parse_route("POST", "/upload?"), None);
    }

    #[test]
    fn test_unknown_paths_are_rejected() {
        assert_eq!(parse_route("POST", "/"), None);
        assert_eq!(parse_route("POST", "/login/"), None);
        assert_eq!(parse_route("POST", "/LOGIN"), None);
        assert_eq!(parse_route("POST", ""), None);
    }
}
