use async_trait::async_trait;
use contact_book::error::{StorageError, StorageResult};
use contact_book::models::AddressBook;
use contact_book::repositories::BookRepository;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock book repository for testing.
///
/// Keeps the saved book as a JSON snapshot in memory, so every save/load
/// goes through the same serialization as the file repository. Tracks
/// method calls for verification.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockBookRepository {
    snapshot: Arc<Mutex<Option<String>>>,
    fail_saves: Arc<Mutex<bool>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
}

#[allow(dead_code)]
impl MockBookRepository {
    /// Create a repository with nothing saved.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository that already holds `book`.
    pub fn with_book(book: &AddressBook) -> Self {
        let repo = Self::new();
        *repo.snapshot.lock().unwrap() = Some(serde_json::to_string(book).unwrap());
        repo
    }

    /// Make every following save fail with an IO error.
    pub fn fail_saves(&self) {
        *self.fail_saves.lock().unwrap() = true;
    }

    /// The raw JSON of the last successful save, if any.
    pub fn snapshot(&self) -> Option<String> {
        self.snapshot.lock().unwrap().clone()
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

#[async_trait]
impl BookRepository for MockBookRepository {
    async fn load(&self) -> StorageResult<AddressBook> {
        self.track_call("load");

        let snapshot = self.snapshot.lock().unwrap().clone();
        match snapshot {
            Some(json) => Ok(serde_json::from_str(&json)?),
            None => Ok(AddressBook::new()),
        }
    }

    async fn save(&self, book: &AddressBook) -> StorageResult<()> {
        self.track_call("save");

        if *self.fail_saves.lock().unwrap() {
            return Err(StorageError::Io(std::io::Error::new(
                std::io::ErrorKind::Other,
                "disk full",
            )));
        }

        let json = serde_json::to_string(book)?;
        *self.snapshot.lock().unwrap() = Some(json);
        Ok(())
    }
}
