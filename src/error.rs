use thiserror::Error;

use crate::store::DocumentId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("document store lock poisoned during {0}")]
    LockPoisoned(&'static str),
    #[error("document id {0} is already taken")]
    DuplicateId(DocumentId),
    #[error("document id sequence exhausted")]
    IdsExhausted,
}
