//! DocumentStore - abstract CRUD storage for documents.

use super::{Document, DocumentId, DocumentPatch, NewDocument};
use crate::error::StoreError;

/// Abstract CRUD storage for documents.
pub trait DocumentStore: Send + Sync {
    /// Get a document by id. Returns None if not found.
    fn get(&self, id: DocumentId) -> Result<Option<Document>, StoreError>;

    /// All documents, in store order.
    fn list(&self) -> Result<Vec<Document>, StoreError>;

    /// Number of stored documents.
    fn len(&self) -> Result<usize, StoreError>;

    /// Insert a document with a caller-chosen id. Fails if the id is taken.
    fn insert(&self, document: Document) -> Result<Document, StoreError>;

    /// Create a document under a freshly allocated id.
    fn create(&self, document: NewDocument) -> Result<Document, StoreError>;

    /// Apply a partial update. Returns the updated document, or None if not found.
    fn update(&self, id: DocumentId, patch: DocumentPatch)
        -> Result<Option<Document>, StoreError>;

    /// Delete a document by id. Returns the removed document, or None if not found.
    fn delete(&self, id: DocumentId) -> Result<Option<Document>, StoreError>;
}
