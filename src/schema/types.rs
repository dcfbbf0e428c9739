use async_graphql::SimpleObject;

use crate::store::{Document, DocumentId};

/// A document record as exposed over GraphQL. Every field is nullable.
#[derive(Debug, Clone, PartialEq, Eq, SimpleObject)]
#[graphql(name = "Document")]
pub struct DocumentObject {
    pub id: Option<DocumentId>,
    pub name: Option<String>,
    /// Opaque file reference.
    pub file: Option<String>,
}

impl From<Document> for DocumentObject {
    fn from(document: Document) -> Self {
        Self {
            id: Some(document.id),
            name: Some(document.name),
            file: document.file,
        }
    }
}
