use async_graphql::{Context, MaybeUndefined, Object, Result};

use super::types::DocumentObject;
use super::{MissingRecord, SharedStore};
use crate::store::{Document, DocumentId, DocumentPatch, NewDocument};

#[derive(Default)]
pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Create new document
    async fn create(
        &self,
        ctx: &Context<'_>,
        name: String,
        file: Option<String>,
    ) -> Result<Option<DocumentObject>> {
        let store = ctx.data::<SharedStore>()?;
        let document = store.create(NewDocument { name, file })?;
        tracing::debug!(id = document.id, "document created");
        Ok(Some(document.into()))
    }

    /// Update document by id
    ///
    /// Only the supplied fields change. `file: null` clears the file;
    /// `name: null` is ignored.
    async fn update(
        &self,
        ctx: &Context<'_>,
        id: DocumentId,
        name: Option<String>,
        file: MaybeUndefined<String>,
    ) -> Result<Option<DocumentObject>> {
        let store = ctx.data::<SharedStore>()?;
        let patch = DocumentPatch {
            name,
            file: match file {
                MaybeUndefined::Undefined => None,
                MaybeUndefined::Null => Some(None),
                MaybeUndefined::Value(file) => Some(Some(file)),
            },
        };
        let updated = store.update(id, patch)?;
        if updated.is_none() {
            tracing::debug!(id, "update missed");
        }
        Ok(on_missing(ctx, updated))
    }

    /// Delete document by id
    async fn delete(&self, ctx: &Context<'_>, id: DocumentId) -> Result<Option<DocumentObject>> {
        let store = ctx.data::<SharedStore>()?;
        let removed = store.delete(id)?;
        if removed.is_none() {
            tracing::debug!(id, "delete missed");
        }
        Ok(on_missing(ctx, removed))
    }
}

fn on_missing(ctx: &Context<'_>, document: Option<Document>) -> Option<DocumentObject> {
    match (document, ctx.data_opt::<MissingRecord>().copied().unwrap_or_default()) {
        (Some(document), _) => Some(document.into()),
        (None, MissingRecord::Null) => None,
        (None, MissingRecord::ZeroValue) => Some(Document::zero().into()),
    }
}
