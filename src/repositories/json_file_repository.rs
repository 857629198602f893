use crate::error::StorageResult;
use crate::models::AddressBook;
use crate::repositories::traits::BookRepository;
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Book repository backed by a JSON file on disk.
///
/// The book is written as a pretty-printed array of records. Saves go to a
/// sibling temporary file first and are renamed into place, so a crash
/// mid-write leaves the previous file intact.
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

#[async_trait]
impl BookRepository for JsonFileRepository {
    async fn load(&self) -> StorageResult<AddressBook> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!("No saved address book at {}, starting empty", self.path.display());
                return Ok(AddressBook::new());
            }
            Err(e) => return Err(e.into()),
        };

        let book: AddressBook = serde_json::from_slice(&bytes)?;
        info!("Loaded {} contacts from {}", book.len(), self.path.display());
        Ok(book)
    }

    async fn save(&self, book: &AddressBook) -> StorageResult<()> {
        let json = serde_json::to_vec_pretty(book)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }

        let temp = self.temp_path();
        debug!("Writing address book to {}", temp.display());
        tokio::fs::write(&temp, json).await?;
        if let Err(e) = tokio::fs::rename(&temp, &self.path).await {
            let _ = tokio::fs::remove_file(&temp).await;
            return Err(e.into());
        }

        info!("Saved {} contacts to {}", book.len(), self.path.display());
        Ok(())
    }
}
