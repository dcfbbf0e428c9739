//! Transport behaviour: methods, parameters, error envelopes, health.

use serde_json::{json, Value};

use crate::support::start_server;

#[tokio::test]
async fn syntax_error_is_200_with_errors() {
    let server = start_server().await;

    let body = server.query("{document(id:1){name").await;
    assert_eq!(body["data"], Value::Null);
    assert!(!body["errors"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn missing_query_param_is_reported_in_body() {
    let server = start_server().await;

    let resp = server
        .client
        .get(server.url("/document"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["data"], Value::Null);
    assert!(!body["errors"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn repeated_query_param_uses_first_value() {
    let server = start_server().await;

    let resp = server
        .client
        .get(server.url("/document"))
        .query(&[("query", "{list{id}}"), ("query", "{list{name}}")])
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(
        body,
        json!({ "data": { "list": [{ "id": 1 }, { "id": 2 }, { "id": 3 }] } })
    );
}

#[tokio::test]
async fn wrong_typed_argument_is_reported_in_body() {
    let server = start_server().await;

    let body = server.query(r#"{document(id:"abc"){name}}"#).await;
    assert_eq!(body["data"], Value::Null);
    assert!(!body["errors"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn any_method_is_served() {
    let server = start_server().await;
    let url = server.url("/document");
    let query = [("query", "{document(id:2){name}}")];

    for req in [
        server.client.post(&url),
        server.client.put(&url),
        server.client.delete(&url),
        server.client.patch(&url),
    ] {
        let resp = req.query(&query).send().await.unwrap();
        assert_eq!(resp.status(), 200);
        let body: Value = resp.json().await.unwrap();
        assert_eq!(body["data"]["document"]["name"], "Document 2");
    }
}

#[tokio::test]
async fn variables_and_operation_name() {
    let server = start_server().await;

    let resp = server
        .client
        .get(server.url("/document"))
        .query(&[
            (
                "query",
                "query One($id: Int) { document(id: $id) { name } } query All { list { id } }",
            ),
            ("variables", r#"{"id": 3}"#),
            ("operationName", "One"),
        ])
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body, json!({ "data": { "document": { "name": "Document 3" } } }));
}

#[tokio::test]
async fn bad_variables_are_reported_in_body() {
    let server = start_server().await;

    let resp = server
        .client
        .get(server.url("/document"))
        .query(&[("query", "{list{id}}"), ("variables", "{oops")])
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["data"], Value::Null);
    assert!(body["errors"][0]["message"]
        .as_str()
        .unwrap()
        .starts_with("invalid variables"));
}

#[tokio::test]
async fn health_reports_document_count() {
    let server = start_server().await;

    let resp = server.client.get(server.url("/health")).send().await.unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body, json!({ "ok": true, "documents": 3 }));
}
