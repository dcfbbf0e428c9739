//! HTTP transport - serves the document schema over axum.
//!
//! Requires the `http` feature.
//!
//! ## Routes
//!
//! - `* /document?query=...` - execute a GraphQL request. Any method is
//!   accepted. Optional `variables` (JSON text) and `operationName` params.
//!   Always answers 200; failures are reported in the body's `errors`.
//! - `GET /health` - returns `{ "ok": true, "documents": n }`.
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use graphdoc::{http, schema, store::InMemoryDocumentStore};
//!
//! let store: schema::SharedStore = Arc::new(InMemoryDocumentStore::seeded()?);
//! let schema = schema::build_schema(store.clone(), Default::default());
//! http::serve(http::router(schema, store), "0.0.0.0:8080".parse()?).await?;
//! ```

use std::net::SocketAddr;

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::{Method, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{any, get};
use axum::{Json, Router};
use serde::Serialize;

use crate::executor::{self, GraphQlRequest};
use crate::schema::{DocumentSchema, SharedStore};

/// Path of the GraphQL route.
pub const DOCUMENT_PATH: &str = "/document";

#[derive(Clone)]
struct AppState {
    schema: DocumentSchema,
    store: SharedStore,
}

/// URL parameters of the GraphQL route. A repeated parameter keeps its first value.
#[derive(Debug, Default)]
struct DocumentParams {
    query: Option<String>,
    variables: Option<String>,
    operation_name: Option<String>,
}

impl DocumentParams {
    fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "query" => &mut params.query,
                "variables" => &mut params.variables,
                "operationName" => &mut params.operation_name,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        params
    }

    fn into_request(self) -> Result<GraphQlRequest, String> {
        let variables = match self.variables.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(
                serde_json::from_str(raw).map_err(|e| format!("invalid variables: {e}"))?,
            ),
        };
        Ok(GraphQlRequest {
            query: self.query.unwrap_or_default(),
            variables,
            operation_name: self.operation_name.filter(|name| !name.is_empty()),
        })
    }
}

#[derive(Debug, Serialize)]
struct Health {
    ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    documents: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Build the axum `Router` serving the schema.
pub fn router(schema: DocumentSchema, store: SharedStore) -> Router {
    Router::new()
        .route(DOCUMENT_PATH, any(document_handler))
        .route("/health", get(health_handler))
        .with_state(AppState { schema, store })
}

/// Serve the router at `addr` until the listener fails.
pub async fn serve(app: Router, addr: SocketAddr) -> Result<(), std::io::Error> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(addr = %listener.local_addr()?, "server is running");
    axum::serve(listener, app).await
}

/// `* /document` - run the `query` URL parameter against the schema.
async fn document_handler(
    State(state): State<AppState>,
    method: Method,
    pairs: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> impl IntoResponse {
    let request = pairs
        .map_err(|rejection| rejection.body_text())
        .and_then(|Query(pairs)| DocumentParams::from_pairs(pairs).into_request());
    let response = match request {
        Ok(request) => {
            tracing::debug!(%method, query = %request.query, "graphql request");
            executor::execute(&state.schema, request).await
        }
        Err(message) => executor::error_response(message),
    };
    Json(response)
}

/// `GET /health` - returns `{ "ok": true, "documents": n }`.
async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    match state.store.len() {
        Ok(documents) => (
            StatusCode::OK,
            Json(Health {
                ok: true,
                documents: Some(documents),
                error: None,
            }),
        ),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(Health {
                ok: false,
                documents: None,
                error: Some(e.to_string()),
            }),
        ),
    }
}
