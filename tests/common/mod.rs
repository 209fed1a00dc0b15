//! Shared helpers for integration tests against a mocked panel.
#![allow(dead_code)]

use easypanel_mcp::client::{JsonObject, PanelClient};
use serde_json::{json, Value};
use wiremock::{MockServer, Request};

/// Start a mock panel and a client pointed at it.
pub async fn panel(token: Option<&str>) -> (MockServer, PanelClient) {
    let server = MockServer::start().await;
    let client = PanelClient::new(server.uri(), token.map(str::to_owned));
    (server, client)
}

/// Wrap `value` the way the panel wraps successful results.
pub fn success(value: Value) -> Value {
    json!({ "result": { "data": { "json": value } } })
}

/// Unwrap a `json!` object literal.
pub fn object(value: Value) -> JsonObject {
    match value {
        Value::Object(map) => map,
        other => panic!("expected object literal, got {other}"),
    }
}

pub async fn requests(server: &MockServer) -> Vec<Request> {
    server
        .received_requests()
        .await
        .expect("request recording is enabled")
}

pub fn authorization(request: &Request) -> Option<String> {
    request
        .headers
        .get("authorization")
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned)
}

/// Decoded `input` query parameter of a recorded request.
pub fn query_input(request: &Request) -> Option<Value> {
    request
        .url
        .query_pairs()
        .find(|(key, _)| key == "input")
        .map(|(_, value)| serde_json::from_str(&value).expect("input is JSON"))
}
