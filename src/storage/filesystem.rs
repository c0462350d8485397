//! File-backed document store
//!
//! Persists each collection as a JSON array under a data directory. Every
//! write goes to a `.tmp` sibling which is then renamed over the collection
//! file, so a crash never leaves a half-written collection behind.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use log::{debug, info};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::fs;
use tokio::sync::Mutex;

use crate::error::StoreError;
use crate::storage::records::{ImageRecord, NewUser, User, new_document_id};
use crate::storage::{AccountStore, MediaStore};

/// Collection file for accounts
pub const USERS_FILE: &str = "User.json";
/// Collection file for image references
pub const IMAGES_FILE: &str = "imginfo.json";

/// Document store backed by JSON files in a directory
pub struct FileStore {
    root: PathBuf,
    users: Mutex<Vec<User>>,
    images: Mutex<Vec<ImageRecord>>,
}

impl FileStore {
    /// Opens the store rooted at `root`, creating the directory if needed.
    ///
    /// Missing collection files are treated as empty collections.
    pub async fn open(root: PathBuf) -> Result<Self, StoreError> {
        fs::create_dir_all(&root).await?;

        let users: Vec<User> = load_collection(&root.join(USERS_FILE)).await?;
        let images: Vec<ImageRecord> = load_collection(&root.join(IMAGES_FILE)).await?;

        info!(
            "Loaded {} users and {} image records from {}",
            users.len(),
            images.len(),
            root.display()
        );

        Ok(Self {
            root,
            users: Mutex::new(users),
            images: Mutex::new(images),
        })
    }
}

async fn load_collection<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, StoreError> {
    match fs::read(path).await {
        Ok(bytes) if bytes.is_empty() => Ok(Vec::new()),
        Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(Vec::new()),
        Err(e) => Err(StoreError::from(e)),
    }
}

async fn write_collection<T: Serialize>(path: &Path, documents: &[T]) -> Result<(), StoreError> {
    let bytes = serde_json::to_vec_pretty(documents)?;
    let temp_path = path.with_extension("json.tmp");

    fs::write(&temp_path, &bytes).await?;
    fs::rename(&temp_path, path).await?;

    debug!("Wrote {} documents to {}", documents.len(), path.display());
    Ok(())
}

#[async_trait]
impl AccountStore for FileStore {
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let users = self.users.lock().await;
        Ok(users.iter().find(|u| u.email == email).cloned())
    }

    async fn save_user(&self, user: NewUser) -> Result<User, StoreError> {
        let mut users = self.users.lock().await;

        if users.iter().any(|u| u.email == user.email) {
            return Err(StoreError::DuplicateEmail(user.email));
        }

        let user = user.into_user(new_document_id());
        users.push(user.clone());

        if let Err(e) = write_collection(&self.root.join(USERS_FILE), &users).await {
            users.pop();
            return Err(e);
        }

        Ok(user)
    }
}

#[async_trait]
impl MediaStore for FileStore {
    async fn save_image_record(&self, name: String) -> Result<ImageRecord, StoreError> {
        let mut images = self.images.lock().await;

        let record = ImageRecord {
            id: new_document_id(),
            name,
        };
        images.push(record.clone());

        if let Err(e) = write_collection(&self.root.join(IMAGES_FILE), &images).await {
            images.pop();
            return Err(e);
        }

        Ok(record)
    }
}
