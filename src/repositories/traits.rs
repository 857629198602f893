use crate::error::StorageResult;
use crate::models::AddressBook;
use async_trait::async_trait;

/// Repository for the persisted address book.
///
/// The whole book is loaded at session start and written back wholesale,
/// so implementations never see individual records.
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// Load the stored book, or an empty one if nothing has been saved yet.
    async fn load(&self) -> StorageResult<AddressBook>;

    /// Replace the stored book with `book`.
    async fn save(&self, book: &AddressBook) -> StorageResult<()>;
}
