//! Document records
//!
//! Defines the documents held by the `User` and `imginfo` collections.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Generates an opaque document identifier.
pub fn new_document_id() -> String {
    Uuid::new_v4().to_string()
}

/// A registered account, keyed by `email`.
///
/// The password is kept exactly as submitted at registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Account fields before the store assigns an identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl NewUser {
    pub fn into_user(self, id: String) -> User {
        User {
            id,
            name: self.name,
            email: self.email,
            password: self.password,
        }
    }
}

/// An uploaded image reference (file name or encoded blob).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRecord {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
}
