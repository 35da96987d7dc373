use crate::error::StorageResult;
use crate::models::ContactBook;
use async_trait::async_trait;

/// Store for the persisted contact book.
///
/// Provides abstraction over how the book is loaded and saved,
/// enabling different implementations (JSON file, mock).
#[async_trait]
pub trait ContactStore: Send + Sync {
    /// Load the full contact book.
    ///
    /// A missing file yields an empty book, not an error. Content that
    /// exists but cannot be read or decoded is an error; the caller decides
    /// whether to degrade to an empty book.
    async fn load(&self) -> StorageResult<ContactBook>;

    /// Persist the full contact book, replacing whatever was stored before.
    async fn save(&self, contacts: &ContactBook) -> StorageResult<()>;
}
