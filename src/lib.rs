pub mod config;
mod error;
pub mod executor;
pub mod schema;
pub mod store;

#[cfg(feature = "http")]
pub mod http;

pub use config::{Config, ConfigError};
pub use error::StoreError;
pub use executor::{execute, execute_query, GraphQlRequest};
pub use schema::{build_schema, DocumentSchema, MissingRecord, SchemaOptions, SharedStore};
pub use store::{Document, DocumentStore, InMemoryDocumentStore};

// Re-export the GraphQL response type handed back by the executor
pub use async_graphql::Response;
