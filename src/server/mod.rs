//! MCP server exposing the tool catalog over stdio or streamable HTTP.

#[cfg(feature = "http-server")]
pub mod http;

use std::fmt;
use std::sync::Arc;

use rmcp::model::{
    CallToolRequestParams, CallToolResult, Content, ErrorData, Implementation, ListToolsResult,
    PaginatedRequestParams, ServerCapabilities, ServerInfo, Tool,
};
use rmcp::service::RequestContext;
use rmcp::{RoleServer, ServerHandler, ServiceExt};
use serde_json::Value;

use crate::catalog::{PanelRpc, ToolCatalog, LOGIN_TOOL};
use crate::client::{JsonObject, PanelClient};
use crate::config::{ServerConfig, TransportMode};
use crate::error::{PanelError, Result};

/// Name reported in the MCP handshake.
pub const SERVER_NAME: &str = "easypanel";

const INSTRUCTIONS: &str = "Manage an EasyPanel server. Tools map one-to-one onto panel \
procedures; service-scoped tools take projectName and serviceName. If no API token is \
configured, call easypanel_login first. easypanel_trpc_raw reaches any procedure not \
covered by a dedicated tool.";

/// MCP handler backed by one bridge client and one catalog.
#[derive(Clone)]
pub struct PanelMcpServer {
    rpc: Arc<dyn PanelRpc>,
    catalog: Arc<ToolCatalog>,
}

impl fmt::Debug for PanelMcpServer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PanelMcpServer")
            .field("tools", &self.catalog.len())
            .field("access_mode", &self.catalog.access_mode())
            .finish_non_exhaustive()
    }
}

impl PanelMcpServer {
    pub fn new(client: PanelClient, catalog: Arc<ToolCatalog>) -> Self {
        Self::with_rpc(Arc::new(client), catalog)
    }

    /// Server over any [`PanelRpc`] implementation.
    pub fn with_rpc(rpc: Arc<dyn PanelRpc>, catalog: Arc<ToolCatalog>) -> Self {
        Self { rpc, catalog }
    }

    /// Fresh client seeded with the configured token, plus a full catalog.
    pub fn from_config(config: &ServerConfig) -> Self {
        let client = PanelClient::new(config.panel_url.clone(), config.panel_token.clone());
        Self::new(client, Arc::new(ToolCatalog::new(config.access_mode)))
    }

    pub fn catalog(&self) -> &ToolCatalog {
        &self.catalog
    }

    /// Tools offered to MCP clients.
    pub fn tool_list(&self) -> Vec<Tool> {
        self.catalog
            .tools()
            .map(|spec| {
                Tool::new(
                    spec.name.clone(),
                    spec.description.clone(),
                    Arc::new(spec.parameters.to_object()),
                )
            })
            .collect()
    }

    /// Run one tool call and shape the outcome for MCP.
    ///
    /// Unknown tools are a protocol-level `invalid_params` error. Every other
    /// failure becomes an error result whose text starts with `Error: `.
    pub async fn dispatch(
        &self,
        name: &str,
        arguments: Option<JsonObject>,
    ) -> std::result::Result<CallToolResult, ErrorData> {
        if self.catalog.get(name).is_none() {
            tracing::warn!(tool = name, "unknown tool requested");
            return Err(ErrorData::invalid_params(
                format!("Unknown tool: {name}"),
                None,
            ));
        }

        let arguments = arguments.map_or(Value::Null, Value::Object);
        match self.catalog.invoke(self.rpc.as_ref(), name, arguments).await {
            Ok(value) => Ok(CallToolResult::success(vec![Content::text(render(&value))])),
            Err(err) => {
                tracing::warn!(
                    tool = name,
                    category = ?err.category(),
                    error = %err,
                    "tool call failed"
                );
                Ok(CallToolResult::error(vec![Content::text(format!(
                    "Error: {err}"
                ))]))
            }
        }
    }
}

fn render(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

impl ServerHandler for PanelMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: SERVER_NAME.to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            instructions: Some(INSTRUCTIONS.to_string()),
            ..Default::default()
        }
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListToolsResult, ErrorData> {
        Ok(ListToolsResult::with_all_items(self.tool_list()))
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParams,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<CallToolResult, ErrorData> {
        self.dispatch(&request.name, request.arguments).await
    }
}

/// Run the server on the configured transport until the client or a signal
/// ends it.
pub async fn serve(config: ServerConfig) -> Result<()> {
    if config.panel_token.is_none() {
        tracing::warn!("no panel token configured; call {LOGIN_TOOL} before other tools");
    }

    match config.transport {
        TransportMode::Stdio => serve_stdio(&config).await,
        #[cfg(feature = "http-server")]
        TransportMode::Http => http::serve_http(config).await,
        #[cfg(not(feature = "http-server"))]
        TransportMode::Http => Err(PanelError::Configuration(
            "HTTP transport requires the `http-server` feature".into(),
        )),
    }
}

/// Serve one MCP session over stdin/stdout.
pub async fn serve_stdio(config: &ServerConfig) -> Result<()> {
    let server = PanelMcpServer::from_config(config);
    tracing::info!(
        tools = server.catalog.len(),
        access_mode = %config.access_mode,
        panel = %config.panel_url,
        "serving MCP over stdio"
    );

    let running = server
        .serve(rmcp::transport::stdio())
        .await
        .map_err(|err| PanelError::Server(err.to_string()))?;
    let reason = running
        .waiting()
        .await
        .map_err(|err| PanelError::Server(err.to_string()))?;
    tracing::info!(?reason, "stdio session ended");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{ToolParameters, ToolSpec};
    use crate::client::CallKind;
    use crate::config::AccessMode;
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::Mutex;

    #[derive(Default)]
    struct ScriptedRpc {
        calls: Mutex<Vec<(String, Option<Value>)>>,
        failure: Option<String>,
    }

    impl ScriptedRpc {
        fn answer(&self, procedure: &str, input: Option<Value>) -> Result<Value> {
            self.calls
                .lock()
                .unwrap()
                .push((procedure.to_string(), input.clone()));
            match &self.failure {
                Some(message) => Err(PanelError::rpc(message.clone())),
                None => Ok(json!({ "procedure": procedure, "input": input })),
            }
        }
    }

    #[async_trait]
    impl PanelRpc for ScriptedRpc {
        async fn login(&self, _identifier: &str, _secret: &str) -> Result<String> {
            Ok("tok123".into())
        }

        async fn query(&self, procedure: &str, input: Option<&JsonObject>) -> Result<Value> {
            self.answer(procedure, input.cloned().map(Value::Object))
        }

        async fn mutation(&self, procedure: &str, input: &JsonObject) -> Result<Value> {
            self.answer(procedure, Some(Value::Object(input.clone())))
        }
    }

    fn catalog(mode: AccessMode) -> Arc<ToolCatalog> {
        Arc::new(ToolCatalog::from_tools(
            vec![
                ToolSpec::procedure(
                    "projects",
                    "List all projects",
                    "projects.listProjects",
                    CallKind::Query,
                    ToolParameters::empty(),
                ),
                ToolSpec::procedure(
                    "destroy",
                    "Destroy a project",
                    "projects.destroyProject",
                    CallKind::Mutation,
                    ToolParameters::object().string("projectName", true).build(),
                ),
            ],
            mode,
        ))
    }

    fn text(result: &CallToolResult) -> &str {
        result.content[0]
            .as_text()
            .map(|text| text.text.as_str())
            .unwrap_or_default()
    }

    #[tokio::test]
    async fn unknown_tool_is_invalid_params() {
        let server = PanelMcpServer::with_rpc(Arc::new(ScriptedRpc::default()), catalog(AccessMode::Full));
        let err = server.dispatch("nope", None).await.unwrap_err();
        assert!(err.message.contains("nope"));
    }

    #[tokio::test]
    async fn success_is_pretty_printed_json() {
        let server = PanelMcpServer::with_rpc(Arc::new(ScriptedRpc::default()), catalog(AccessMode::Full));
        let result = server.dispatch("projects", None).await.unwrap();
        assert_ne!(result.is_error, Some(true));
        let expected = serde_json::to_string_pretty(&json!({
            "procedure": "projects.listProjects",
            "input": null,
        }))
        .unwrap();
        assert_eq!(text(&result), expected);
    }

    #[tokio::test]
    async fn remote_failure_becomes_error_result() {
        let rpc = ScriptedRpc {
            failure: Some("boom".into()),
            ..Default::default()
        };
        let server = PanelMcpServer::with_rpc(Arc::new(rpc), catalog(AccessMode::Full));
        let args = json!({ "projectName": "shop" }).as_object().cloned();
        let result = server.dispatch("destroy", args).await.unwrap();
        assert_eq!(result.is_error, Some(true));
        assert_eq!(text(&result), "Error: tRPC error: boom");
    }

    #[tokio::test]
    async fn read_only_rejection_never_reaches_the_panel() {
        let rpc = Arc::new(ScriptedRpc::default());
        let server = PanelMcpServer::with_rpc(rpc.clone(), catalog(AccessMode::ReadOnly));
        let args = json!({ "projectName": "shop" }).as_object().cloned();
        let result = server.dispatch("destroy", args).await.unwrap();
        assert_eq!(result.is_error, Some(true));
        assert!(text(&result).contains("read-only"));
        assert!(rpc.calls.lock().unwrap().is_empty());
        assert_eq!(server.tool_list().len(), 1);
    }

    #[test]
    fn info_advertises_tools() {
        let server = PanelMcpServer::with_rpc(Arc::new(ScriptedRpc::default()), catalog(AccessMode::Full));
        let info = server.get_info();
        assert_eq!(info.server_info.name, SERVER_NAME);
        assert!(info.capabilities.tools.is_some());
    }
}
