use async_graphql::{Context, Object, Result};

use super::types::DocumentObject;
use super::SharedStore;
use crate::store::DocumentId;

#[derive(Default)]
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Get document by id
    async fn document(
        &self,
        ctx: &Context<'_>,
        id: Option<DocumentId>,
    ) -> Result<Option<DocumentObject>> {
        let Some(id) = id else {
            return Ok(None);
        };
        let store = ctx.data::<SharedStore>()?;
        Ok(store.get(id)?.map(DocumentObject::from))
    }

    /// Get document list
    async fn list(&self, ctx: &Context<'_>) -> Result<Option<Vec<Option<DocumentObject>>>> {
        let store = ctx.data::<SharedStore>()?;
        Ok(Some(
            store
                .list()?
                .into_iter()
                .map(|document| Some(document.into()))
                .collect(),
        ))
    }
}
