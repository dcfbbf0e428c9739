//! Store - the in-memory table of documents the GraphQL resolvers act on.
//!
//! Records are indexed by id and iterate in insertion order. Every operation
//! holds the store lock for its whole read-modify-write, so concurrent
//! requests never observe a half-applied mutation.
//!
//! ## Example
//!
//! ```ignore
//! use graphdoc::store::{DocumentPatch, DocumentStore, InMemoryDocumentStore, NewDocument};
//!
//! let store = InMemoryDocumentStore::seeded()?;
//! let created = store.create(NewDocument::new("Report").with_file("report.pdf"))?;
//! store.update(created.id, DocumentPatch::default().name("Q3 report"))?;
//! let removed = store.delete(created.id)?;
//! ```

mod in_memory;
mod store;

pub use in_memory::InMemoryDocumentStore;
pub use store::DocumentStore;

/// Identifier of a document. Matches the range of the GraphQL `Int` scalar.
pub type DocumentId = i32;

/// File reference carried by the seed records.
pub const SEED_FILE: &str = "a23hkjhl03209n2lh34sd009f92h3h4120098fwejk13h342h...";

/// A stored document record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub id: DocumentId,
    pub name: String,
    pub file: Option<String>,
}

impl Document {
    pub fn new(id: DocumentId, name: impl Into<String>, file: Option<String>) -> Self {
        Self {
            id,
            name: name.into(),
            file,
        }
    }

    /// The record returned for a miss under the zero-value policy: id 0 and
    /// empty strings.
    pub fn zero() -> Self {
        Self {
            id: 0,
            name: String::new(),
            file: Some(String::new()),
        }
    }

    /// Overwrite the fields present in `patch`.
    pub fn apply(&mut self, patch: DocumentPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(file) = patch.file {
            self.file = file;
        }
    }
}

/// Input for creating a document. The store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NewDocument {
    pub name: String,
    pub file: Option<String>,
}

impl NewDocument {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            file: None,
        }
    }

    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }
}

/// A partial update.
///
/// `name: None` keeps the current name. For `file`, `None` keeps the current
/// value, `Some(None)` clears it and `Some(Some(_))` replaces it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DocumentPatch {
    pub name: Option<String>,
    pub file: Option<Option<String>>,
}

impl DocumentPatch {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(Some(file.into()));
        self
    }

    pub fn clear_file(mut self) -> Self {
        self.file = Some(None);
        self
    }
}

/// The three records a fresh service starts with.
pub fn seed_documents() -> Vec<Document> {
    vec![
        Document::new(1, "Document one", Some(SEED_FILE.to_string())),
        Document::new(2, "Document 2", Some(SEED_FILE.to_string())),
        Document::new(3, "Document 3", Some(SEED_FILE.to_string())),
    ]
}
