//! In-memory document store
//!
//! Keeps both collections in process memory for the lifetime of the server.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::StoreError;
use crate::storage::records::{ImageRecord, NewUser, User, new_document_id};
use crate::storage::{AccountStore, MediaStore};

/// Document store backed by process memory
#[derive(Default)]
pub struct MemoryStore {
    users: RwLock<HashMap<String, User>>,
    images: RwLock<Vec<ImageRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered accounts.
    pub async fn user_count(&self) -> usize {
        self.users.read().await.len()
    }

    /// Snapshot of the stored image records, in insertion order.
    pub async fn image_records(&self) -> Vec<ImageRecord> {
        self.images.read().await.clone()
    }
}

#[async_trait]
impl AccountStore for MemoryStore {
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        Ok(self.users.read().await.get(email).cloned())
    }

    async fn save_user(&self, user: NewUser) -> Result<User, StoreError> {
        let mut users = self.users.write().await;

        if users.contains_key(&user.email) {
            return Err(StoreError::DuplicateEmail(user.email));
        }

        let user = user.into_user(new_document_id());
        users.insert(user.email.clone(), user.clone());
        Ok(user)
    }
}

#[async_trait]
impl MediaStore for MemoryStore {
    async fn save_image_record(&self, name: String) -> Result<ImageRecord, StoreError> {
        let record = ImageRecord {
            id: new_document_id(),
            name,
        };
        self.images.write().await.push(record.clone());
        Ok(record)
    }
}
