mod common;

use std::sync::Arc;

use easypanel_mcp::catalog::ToolCatalog;
use easypanel_mcp::config::AccessMode;
use easypanel_mcp::server::PanelMcpServer;
use pretty_assertions::assert_eq;
use rmcp::model::CallToolResult;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

use common::{object, panel, success};

fn first_text(result: &CallToolResult) -> String {
    result
        .content
        .first()
        .and_then(|content| content.as_text())
        .map(|text| text.text.clone())
        .expect("text content")
}

#[tokio::test]
async fn tool_results_are_pretty_printed() {
    let (server, client) = panel(None).await;
    Mock::given(method("GET"))
        .and(path("/api/trpc/projects.listProjects"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(success(json!([{ "name": "shop" }]))),
        )
        .mount(&server)
        .await;

    let mcp = PanelMcpServer::new(client, Arc::new(ToolCatalog::new(AccessMode::Full)));
    let result = mcp
        .dispatch("easypanel_list_projects", None)
        .await
        .expect("dispatch");

    assert_ne!(result.is_error, Some(true));
    assert_eq!(first_text(&result), "[\n  {\n    \"name\": \"shop\"\n  }\n]");
}

#[tokio::test]
async fn panel_errors_become_error_results() {
    let (server, client) = panel(None).await;
    Mock::given(method("POST"))
        .and(path("/api/trpc/projects.createProject"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "error": { "json": { "message": "name taken" } } })),
        )
        .mount(&server)
        .await;

    let mcp = PanelMcpServer::new(client, Arc::new(ToolCatalog::new(AccessMode::Full)));
    let result = mcp
        .dispatch(
            "easypanel_create_project",
            Some(object(json!({ "name": "shop" }))),
        )
        .await
        .expect("dispatch");

    assert_eq!(result.is_error, Some(true));
    assert_eq!(first_text(&result), "Error: tRPC error: name taken");
}

#[tokio::test]
async fn login_result_is_a_json_string() {
    let (server, client) = panel(None).await;
    Mock::given(method("POST"))
        .and(path("/api/trpc/auth.login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(success(json!({ "token": "tok123" }))))
        .mount(&server)
        .await;

    let mcp = PanelMcpServer::new(client, Arc::new(ToolCatalog::new(AccessMode::Full)));
    let result = mcp
        .dispatch(
            "easypanel_login",
            Some(object(json!({ "email": "admin@example.com", "password": "pw" }))),
        )
        .await
        .expect("dispatch");

    assert_eq!(first_text(&result), "\"Logged in. Token: tok123\"");
}

#[tokio::test]
async fn unknown_tools_are_protocol_errors() {
    let (_server, client) = panel(None).await;
    let mcp = PanelMcpServer::new(client, Arc::new(ToolCatalog::new(AccessMode::Full)));
    assert!(mcp.dispatch("easypanel_nope", None).await.is_err());
}

#[test]
fn read_only_listing_excludes_mutations() {
    let client = easypanel_mcp::client::PanelClient::new("http://127.0.0.1:9", None);
    let full = PanelMcpServer::new(client.clone(), Arc::new(ToolCatalog::new(AccessMode::Full)));
    let read_only = PanelMcpServer::new(client, Arc::new(ToolCatalog::new(AccessMode::ReadOnly)));

    let full_names: Vec<_> = full.tool_list().into_iter().map(|tool| tool.name).collect();
    let read_only_names: Vec<_> = read_only.tool_list().into_iter().map(|tool| tool.name).collect();

    assert!(full_names.iter().any(|name| name == "easypanel_destroy_project"));
    assert!(!read_only_names.iter().any(|name| name == "easypanel_destroy_project"));
    assert!(read_only_names.len() < full_names.len());
}
