use std::sync::Arc;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use graphdoc::{build_schema, http, Config, InMemoryDocumentStore, SchemaOptions, SharedStore};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env()?;
    tracing::info!(
        addr = %config.addr,
        seed = config.seed,
        missing = %config.missing,
        "starting document service"
    );

    let store = if config.seed {
        InMemoryDocumentStore::seeded().context("seeding document store")?
    } else {
        InMemoryDocumentStore::new()
    };
    let store: SharedStore = Arc::new(store);

    let schema = build_schema(
        store.clone(),
        SchemaOptions {
            missing: config.missing,
            ..SchemaOptions::default()
        },
    );

    http::serve(http::router(schema, store), config.addr)
        .await
        .with_context(|| format!("serving on {}", config.addr))
}
