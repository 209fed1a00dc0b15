//! EasyPanel MCP server.
//!
//! A thin bridge to an EasyPanel instance's tRPC API ([`client`]), a static
//! catalog mapping MCP tools onto panel procedures ([`catalog`]) and an MCP
//! server exposing that catalog over stdio or streamable HTTP ([`server`]).
//!
//! # Quick Start
//!
//! ```no_run
//! use easypanel_mcp::client::PanelClient;
//!
//! # async fn example() -> easypanel_mcp::error::Result<()> {
//! let client = PanelClient::new("https://panel.example.com", None);
//! client.login("admin@example.com", "secret").await?;
//! let projects = client.query("projects.listProjects", None).await?;
//! println!("{projects}");
//! # Ok(())
//! # }
//! ```

pub mod catalog;
#[cfg(feature = "cli")]
pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod server;

pub use catalog::{PanelRpc, ToolCatalog};
pub use client::{CallKind, PanelClient};
pub use config::{AccessMode, ServerConfig};
pub use error::{PanelError, Result};
