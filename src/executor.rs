//! Query executor - runs a GraphQL request against the document schema.
//!
//! Errors in the response are logged and left in place; the caller always
//! gets the full response (partial data plus errors).

use async_graphql::{Response, ServerError, Variables};

use crate::schema::DocumentSchema;

/// Parameters accepted by the GraphQL endpoint.
#[derive(Debug, Clone, Default)]
pub struct GraphQlRequest {
    pub query: String,
    pub variables: Option<serde_json::Value>,
    pub operation_name: Option<String>,
}

impl GraphQlRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }

    pub fn variables(mut self, variables: serde_json::Value) -> Self {
        self.variables = Some(variables);
        self
    }

    pub fn operation_name(mut self, name: impl Into<String>) -> Self {
        self.operation_name = Some(name.into());
        self
    }
}

/// Execute a request and return the full response.
pub async fn execute(schema: &DocumentSchema, request: GraphQlRequest) -> Response {
    let mut gql = async_graphql::Request::new(request.query);
    if let Some(variables) = request.variables {
        gql = gql.variables(Variables::from_json(variables));
    }
    if let Some(name) = request.operation_name {
        gql = gql.operation_name(name);
    }

    let response = schema.execute(gql).await;
    log_errors(&response);
    response
}

/// Execute a bare query string.
pub async fn execute_query(schema: &DocumentSchema, query: &str) -> Response {
    execute(schema, GraphQlRequest::new(query)).await
}

/// A response carrying only errors, for requests rejected before execution.
pub fn error_response(message: impl Into<String>) -> Response {
    let response = Response::from_errors(vec![ServerError::new(message, None)]);
    log_errors(&response);
    response
}

fn log_errors(response: &Response) {
    for error in &response.errors {
        tracing::warn!(error = %error.message, locations = ?error.locations, "graphql error");
    }
}
