//! Streamable-HTTP front door with an optional API-key gate.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::{Query, Request, State};
use axum::http::{header, HeaderName, Method, StatusCode};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use rmcp::transport::streamable_http_server::session::local::LocalSessionManager;
use rmcp::transport::streamable_http_server::{StreamableHttpServerConfig, StreamableHttpService};
use serde::Deserialize;
use serde_json::json;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::PanelMcpServer;
use crate::catalog::ToolCatalog;
use crate::config::ServerConfig;
use crate::error::Result;

pub const MCP_PATH: &str = "/mcp";
pub const HEALTH_PATH: &str = "/health";

const SESSION_HEADER: &str = "mcp-session-id";
const UNAUTHORIZED_MESSAGE: &str = "Unauthorized. Set Authorization: Bearer <MCP_API_KEY>";
const NOT_FOUND_MESSAGE: &str = "Not found. MCP endpoint: /mcp";

#[derive(Clone)]
struct Gate {
    api_key: Option<Arc<str>>,
}

#[derive(Debug, Deserialize)]
struct KeyParam {
    api_key: Option<String>,
}

/// Whether a request carrying `authorization` and `api_key_param` may pass.
///
/// With no key configured every request passes.
pub fn is_authorized(
    expected: Option<&str>,
    authorization: Option<&str>,
    api_key_param: Option<&str>,
) -> bool {
    let Some(expected) = expected else {
        return true;
    };
    let bearer = authorization.and_then(|value| value.strip_prefix("Bearer "));
    bearer == Some(expected) || api_key_param == Some(expected)
}

async fn require_api_key(
    State(gate): State<Gate>,
    query: std::result::Result<Query<KeyParam>, axum::extract::rejection::QueryRejection>,
    request: Request,
    next: Next,
) -> Response {
    let authorization = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok());
    let api_key_param = query.ok().and_then(|Query(param)| param.api_key);

    if is_authorized(gate.api_key.as_deref(), authorization, api_key_param.as_deref()) {
        return next.run(request).await;
    }

    tracing::warn!(path = %request.uri().path(), "rejected request without a valid API key");
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({ "error": UNAUTHORIZED_MESSAGE })),
    )
        .into_response()
}

async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, NOT_FOUND_MESSAGE)
}

fn cors() -> CorsLayer {
    let session = HeaderName::from_static(SESSION_HEADER);
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION, session.clone()])
        .expose_headers([session])
}

/// Build the HTTP application: `/health`, the gated `/mcp` endpoint and a
/// gated 404 fallback.
pub fn router(config: &ServerConfig) -> Router {
    let tool_count = ToolCatalog::new(config.access_mode).len();
    let auth_enabled = config.http.api_key.is_some();

    let session_config = config.clone();
    let mcp = StreamableHttpService::new(
        move || {
            tracing::debug!("starting MCP session");
            Ok(PanelMcpServer::from_config(&session_config))
        },
        Arc::new(LocalSessionManager::default()),
        StreamableHttpServerConfig::default(),
    );

    let gate = Gate {
        api_key: config.http.api_key.as_deref().map(Arc::from),
    };
    let gated = Router::new()
        .nest_service(MCP_PATH, mcp)
        .fallback(not_found)
        .layer(middleware::from_fn_with_state(gate, require_api_key));

    Router::new()
        .route(
            HEALTH_PATH,
            get(move || async move {
                Json(json!({ "status": "ok", "tools": tool_count, "auth": auth_enabled }))
            }),
        )
        .merge(gated)
        .layer(TraceLayer::new_for_http())
        .layer(cors())
}

/// Bind the configured address and serve until Ctrl+C or SIGTERM.
pub async fn serve_http(config: ServerConfig) -> Result<()> {
    let app = router(&config);
    let listener = tokio::net::TcpListener::bind((config.http.host.as_str(), config.http.port)).await?;
    let addr: SocketAddr = listener.local_addr()?;

    tracing::info!("EasyPanel MCP server listening on http://{addr}{MCP_PATH}");
    if config.http.api_key.is_some() {
        tracing::info!("API key required on {MCP_PATH}");
    } else {
        tracing::warn!("no MCP_API_KEY set; {MCP_PATH} is open");
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("HTTP server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {err}");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => tracing::error!("failed to install SIGTERM handler: {err}"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("received Ctrl+C, shutting down"),
        _ = terminate => tracing::info!("received SIGTERM, shutting down"),
    }
}
