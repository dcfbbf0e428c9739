//! Shared server setup for the HTTP tests.

use std::sync::Arc;

use graphdoc::{build_schema, http, InMemoryDocumentStore, MissingRecord, SchemaOptions};
use serde_json::Value;

pub struct TestServer {
    pub base: String,
    pub store: InMemoryDocumentStore,
    pub client: reqwest::Client,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    /// GET /document with `query` as URL parameter; asserts 200 and returns the body.
    pub async fn query(&self, query: &str) -> Value {
        let resp = self
            .client
            .get(self.url(http::DOCUMENT_PATH))
            .query(&[("query", query)])
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 200);
        resp.json().await.unwrap()
    }
}

/// Bind to port 0 and serve a seeded store.
pub async fn start_server() -> TestServer {
    start_server_with(MissingRecord::Null).await
}

pub async fn start_server_with(missing: MissingRecord) -> TestServer {
    let store = InMemoryDocumentStore::seeded().unwrap();
    let schema = build_schema(
        Arc::new(store.clone()),
        SchemaOptions {
            missing,
            ..SchemaOptions::default()
        },
    );
    let app = http::router(schema, Arc::new(store.clone()));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    TestServer {
        base: format!("http://{addr}"),
        store,
        client: reqwest::Client::new(),
    }
}
