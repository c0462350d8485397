//! Document storage
//!
//! Defines the account and media store contracts and the document store
//! backends that implement them.

pub mod filesystem;
pub mod memory;
pub mod records;

use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use log::info;

use crate::error::StoreError;
pub use filesystem::FileStore;
pub use memory::MemoryStore;
pub use records::{ImageRecord, NewUser, User};

/// Persists and retrieves accounts by email.
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Looks up the account registered under `email`, compared verbatim.
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;

    /// Assigns an identifier and persists the account.
    ///
    /// Fails with [`StoreError::DuplicateEmail`] if the email is already taken;
    /// the check and the insert happen atomically.
    async fn save_user(&self, user: NewUser) -> Result<User, StoreError>;
}

/// Persists image references.
#[async_trait]
pub trait MediaStore: Send + Sync {
    /// Assigns an identifier and persists a record named `name`.
    ///
    /// Duplicate names are allowed.
    async fn save_image_record(&self, name: String) -> Result<ImageRecord, StoreError>;
}

/// Handles to the two collections of one document store.
#[derive(Clone)]
pub struct Stores {
    pub accounts: Arc<dyn AccountStore>,
    pub media: Arc<dyn MediaStore>,
}

impl Stores {
    /// Serves both collections from a single backend.
    pub fn shared<S>(store: Arc<S>) -> Self
    where
        S: AccountStore + MediaStore + 'static,
    {
        Self {
            accounts: store.clone(),
            media: store,
        }
    }
}

/// Opens the document store named by a connection string.
///
/// Supported schemes: `memory://` and `file://<directory>`.
pub async fn open_store(uri: &str) -> Result<Stores, StoreError> {
    if uri == "memory://" {
        info!("Using in-memory document store");
        return Ok(Stores::shared(Arc::new(MemoryStore::new())));
    }

    if let Some(dir) = uri.strip_prefix("file://") {
        if dir.is_empty() {
            return Err(StoreError::UnsupportedUri(uri.to_string()));
        }
        let store = FileStore::open(PathBuf::from(dir)).await?;
        info!("Using file document store at {}", dir);
        return Ok(Stores::shared(Arc::new(store)));
    }

    Err(StoreError::UnsupportedUri(uri.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_open_memory_store() {
        let stores = open_store("memory://").await.unwrap();
        assert!(stores.accounts.find_user_by_email("a@b.c").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_open_file_store_creates_directory() {
        let temp = tempfile::tempdir().unwrap();
        let dir = temp.path().join("data");
        let uri = format!("file://{}", dir.display());

        let stores = open_store(&uri).await.unwrap();
        stores.media.save_image_record("pic".into()).await.unwrap();

        assert!(dir.is_dir());
    }

    #[tokio::test]
    async fn test_open_rejects_unknown_scheme() {
        let err = open_store("mongodb://localhost:27017/app").await.err().unwrap();
        assert!(matches!(err, StoreError::UnsupportedUri(_)));

        let err = open_store("file://").await.err().unwrap();
        assert!(matches!(err, StoreError::UnsupportedUri(_)));
    }
}
