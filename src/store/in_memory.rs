//! InMemoryDocumentStore - IndexMap-backed document store.

use std::sync::{Arc, RwLock};

use indexmap::IndexMap;

use super::{seed_documents, Document, DocumentId, DocumentPatch, DocumentStore, NewDocument};
use crate::error::StoreError;

struct Table {
    documents: IndexMap<DocumentId, Document>,
    // Kept wider than DocumentId so running past i32::MAX is detectable.
    next_id: i64,
}

impl Table {
    fn allocate_id(&mut self) -> Result<DocumentId, StoreError> {
        loop {
            let id = DocumentId::try_from(self.next_id).map_err(|_| StoreError::IdsExhausted)?;
            self.next_id += 1;
            if !self.documents.contains_key(&id) {
                return Ok(id);
            }
        }
    }
}

/// In-memory document store.
///
/// Lookups are O(1) by id, iteration follows insertion order. Ids handed out
/// by `create` come from a monotonic sequence and never collide with stored
/// ids. Clone-friendly via Arc.
#[derive(Clone)]
pub struct InMemoryDocumentStore {
    table: Arc<RwLock<Table>>,
}

impl Default for InMemoryDocumentStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryDocumentStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            table: Arc::new(RwLock::new(Table {
                documents: IndexMap::new(),
                next_id: 1,
            })),
        }
    }

    /// Create a store holding the three seed documents.
    pub fn seeded() -> Result<Self, StoreError> {
        let store = Self::new();
        for document in seed_documents() {
            store.insert(document)?;
        }
        Ok(store)
    }
}

impl DocumentStore for InMemoryDocumentStore {
    fn get(&self, id: DocumentId) -> Result<Option<Document>, StoreError> {
        let table = self
            .table
            .read()
            .map_err(|_| StoreError::LockPoisoned("get"))?;
        Ok(table.documents.get(&id).cloned())
    }

    fn list(&self) -> Result<Vec<Document>, StoreError> {
        let table = self
            .table
            .read()
            .map_err(|_| StoreError::LockPoisoned("list"))?;
        Ok(table.documents.values().cloned().collect())
    }

    fn len(&self) -> Result<usize, StoreError> {
        let table = self
            .table
            .read()
            .map_err(|_| StoreError::LockPoisoned("len"))?;
        Ok(table.documents.len())
    }

    fn insert(&self, document: Document) -> Result<Document, StoreError> {
        let mut table = self
            .table
            .write()
            .map_err(|_| StoreError::LockPoisoned("insert"))?;

        if table.documents.contains_key(&document.id) {
            return Err(StoreError::DuplicateId(document.id));
        }

        table.next_id = table.next_id.max(i64::from(document.id) + 1);
        table.documents.insert(document.id, document.clone());
        Ok(document)
    }

    fn create(&self, document: NewDocument) -> Result<Document, StoreError> {
        let mut table = self
            .table
            .write()
            .map_err(|_| StoreError::LockPoisoned("create"))?;

        let id = table.allocate_id()?;
        let document = Document::new(id, document.name, document.file);
        table.documents.insert(id, document.clone());
        Ok(document)
    }

    fn update(
        &self,
        id: DocumentId,
        patch: DocumentPatch,
    ) -> Result<Option<Document>, StoreError> {
        let mut table = self
            .table
            .write()
            .map_err(|_| StoreError::LockPoisoned("update"))?;

        Ok(table.documents.get_mut(&id).map(|document| {
            document.apply(patch);
            document.clone()
        }))
    }

    fn delete(&self, id: DocumentId) -> Result<Option<Document>, StoreError> {
        let mut table = self
            .table
            .write()
            .map_err(|_| StoreError::LockPoisoned("delete"))?;

        // shift_remove keeps the remaining records in order.
        Ok(table.documents.shift_remove(&id))
    }
}
