//! GraphQL schema over the document store.
//!
//! ```graphql
//! # Read one / all
//! { document(id: 1) { name file } }
//! { list { id name file } }
//!
//! # Write
//! mutation { create(name: "Test File", file: "test.pdf") { id name file } }
//! mutation { update(id: 1, name: "test name") { id name file } }
//! mutation { delete(id: 1) { id name file } }
//! ```

mod mutation;
mod query;
mod types;

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use async_graphql::{EmptySubscription, Schema};

use crate::store::DocumentStore;

pub use mutation::MutationRoot;
pub use query::QueryRoot;
pub use types::DocumentObject;

/// The store handle resolvers read from the schema data.
pub type SharedStore = Arc<dyn DocumentStore>;

/// The document GraphQL schema type.
pub type DocumentSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// What `update` and `delete` return when no document has the requested id.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MissingRecord {
    /// Return `null`.
    #[default]
    Null,
    /// Return a zero-value record (`id: 0`, empty `name` and `file`).
    ZeroValue,
}

impl FromStr for MissingRecord {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "null" => Ok(MissingRecord::Null),
            "zero" | "zero-value" => Ok(MissingRecord::ZeroValue),
            other => Err(format!("expected `null` or `zero`, got `{other}`")),
        }
    }
}

impl fmt::Display for MissingRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MissingRecord::Null => write!(f, "null"),
            MissingRecord::ZeroValue => write!(f, "zero"),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SchemaOptions {
    pub missing: MissingRecord,
    pub max_depth: usize,
}

impl Default for SchemaOptions {
    fn default() -> Self {
        Self {
            missing: MissingRecord::default(),
            max_depth: 8,
        }
    }
}

/// Build the schema with the store as context.
pub fn build_schema(store: SharedStore, options: SchemaOptions) -> DocumentSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(store)
        .data(options.missing)
        .limit_depth(options.max_depth)
        .finish()
}
